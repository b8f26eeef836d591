//! # Metrics Server - Entry Point
//! src/main.rs
//!
//! Cualquier error de arranque (configuración, socket, bind, listen)
//! termina el proceso con status 1. Después de eso el servidor corre hasta
//! que lo maten desde afuera.

use metrics_server::config::Config;
use metrics_server::logging;
use metrics_server::server::Server;

fn main() {
    let config = Config::new();
    let dispatch = logging::build_dispatch(&config);

    tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!(
            address = %config.address(),
            backlog = config.backlog,
            buffer_size = config.buffer_size,
            log_file = ?config.log_file,
            "iniciando servidor"
        );
    });

    let server = Server::new(config, dispatch.clone());

    if let Err(e) = server.run() {
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::error!(error = %e, "error fatal al iniciar el servidor");
        });
        std::process::exit(1);
    }
}

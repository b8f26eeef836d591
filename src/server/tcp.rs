//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acceptor del servidor: crea el socket de escucha con el backlog
//! configurado y acepta conexiones para siempre. Cada conexión se procesa
//! en su propio thread (sin pool y sin límite de concurrencia); el loop
//! de accept nunca espera a que un thread termine.

use super::connection::{handle_connection, ConnectionContext, UNKNOWN_PEER};
use crate::config::Config;
use crate::error::ServerError;
use crate::http::SingleRead;
use crate::metrics::MetricsRegistry;
use crate::router::Router;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};
use std::sync::Arc;
use std::thread;
use tracing::{error, info, warn, Dispatch};

/// Servidor con métricas por endpoint
pub struct Server {
    config: Config,
    ctx: ConnectionContext,
    dispatch: Dispatch,
}

impl Server {
    /// Crea el servidor con las rutas por defecto y un registro de métricas
    /// nuevo. `dispatch` es el logger que usarán el acceptor y cada thread.
    pub fn new(config: Config, dispatch: Dispatch) -> Self {
        let metrics = MetricsRegistry::new();
        let router = Router::with_default_routes(metrics.clone());

        let ctx = ConnectionContext {
            router: Arc::new(router),
            metrics,
            reader: Arc::new(SingleRead::new(config.buffer_size)),
        };

        Self {
            config,
            ctx,
            dispatch,
        }
    }

    /// Registro de métricas compartido con los threads de conexión
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.ctx.metrics
    }

    /// Valida la configuración, crea el socket y hace bind y listen con el
    /// backlog configurado
    pub fn bind(&self) -> Result<TcpListener, ServerError> {
        self.config.validate()?;
        let address = self.config.address();

        let addr = resolve(&address)?;

        let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
            .map_err(|source| ServerError::Socket {
                address: address.clone(),
                source,
            })?;

        // SO_REUSEADDR - permite reiniciar el servidor con conexiones en TIME_WAIT
        socket
            .set_reuse_address(true)
            .map_err(|source| ServerError::Socket {
                address: address.clone(),
                source,
            })?;

        socket
            .bind(&addr.into())
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?;

        socket
            .listen(self.config.backlog)
            .map_err(|source| ServerError::Listen { address, source })?;

        Ok(socket.into())
    }

    /// Loop de accept. No retorna nunca.
    pub fn serve(&self, listener: TcpListener) -> ! {
        // El guard activa el logger solo en este thread
        let _guard = tracing::dispatcher::set_default(&self.dispatch);

        match listener.local_addr() {
            Ok(addr) => info!(address = %addr, backlog = self.config.backlog, "servidor escuchando"),
            Err(e) => warn!(error = %e, "no se pudo obtener la dirección local"),
        }
        info!("modo concurrente: un thread por conexión");

        loop {
            match listener.accept() {
                Ok((stream, _)) => {
                    let peer = stream.peer_addr().unwrap_or_else(|e| {
                        warn!(error = %e, "no se pudo obtener la dirección del peer");
                        UNKNOWN_PEER
                    });
                    info!(%peer, "nueva conexión");
                    self.spawn_handler(stream, peer);
                }
                Err(e) => {
                    error!(error = %e, "error al aceptar conexión");
                }
            }
        }
    }

    /// Bind + serve. Solo retorna si el arranque falla.
    pub fn run(&self) -> Result<(), ServerError> {
        let listener = self.bind()?;
        self.serve(listener)
    }

    fn spawn_handler(&self, stream: std::net::TcpStream, peer: SocketAddr) {
        let ctx = self.ctx.clone();
        let dispatch = self.dispatch.clone();

        let spawned = thread::Builder::new()
            .name(format!("conn-{}", peer))
            .spawn(move || {
                tracing::dispatcher::with_default(&dispatch, || {
                    handle_connection(stream, peer, &ctx);
                });
            });

        // Fire-and-forget: el JoinHandle se descarta
        if let Err(e) = spawned {
            error!(%peer, error = %e, "no se pudo crear el thread de la conexión");
        }
    }
}

fn resolve(address: &str) -> Result<SocketAddr, ServerError> {
    let resolve_error = |source| ServerError::Resolve {
        address: address.to_string(),
        source,
    };

    address
        .to_socket_addrs()
        .map_err(resolve_error)?
        .next()
        .ok_or_else(|| {
            resolve_error(std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                "no addresses found",
            ))
        })
}

//! # Handler de Conexión
//! src/server/connection.rs
//!
//! Procesa una conexión aceptada de punta a punta:
//!
//! 1. Un único `read` acotado (ver [`RequestReader`])
//! 2. Parseo del request
//! 3. Demora opcional si viene `?block=N` (N segundos)
//! 4. Routing
//! 5. Registro en métricas (total + endpoint, bajo un solo lock)
//! 6. Un único `write`, sin reintentos
//! 7. Cierre del socket, siempre
//!
//! Ningún error sale de aquí: todo se loguea y se resuelve en el lugar.

use crate::http::{Request, RequestReader};
use crate::metrics::{MetricsRegistry, UNKNOWN_ENDPOINT};
use crate::router::Router;
use std::io::Write;
use std::net::{Ipv4Addr, Shutdown, SocketAddr, SocketAddrV4, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Query parameter que simula un handler lento
pub const BLOCK_PARAM: &str = "block";

/// Dirección usada cuando no se puede obtener la del peer
pub const UNKNOWN_PEER: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));

/// Dependencias compartidas que recibe cada conexión
#[derive(Clone)]
pub struct ConnectionContext {
    pub router: Arc<Router>,
    pub metrics: MetricsRegistry,
    pub reader: Arc<dyn RequestReader>,
}

/// Maneja una conexión completa. Consume el stream, que se cierra al salir.
pub fn handle_connection(mut stream: TcpStream, peer: SocketAddr, ctx: &ConnectionContext) {
    let start = Instant::now();

    let raw = match ctx.reader.read_request(&mut stream) {
        Ok(raw) => raw,
        Err(e) => {
            error!(%peer, error = %e, "error leyendo el request");
            close(stream, peer);
            return;
        }
    };
    debug!(%peer, bytes = raw.len(), "request recibido");

    let request = Request::from_bytes(&raw);
    if request.path().is_empty() {
        warn!(%peer, "request line malformado");
    }

    if let Some(delay) = requested_delay(&request) {
        debug!(%peer, path = request.path(), block_secs = delay.as_secs(), "simulando handler lento");
        thread::sleep(delay);
    }

    let routed = ctx.router.route(&request);
    ctx.metrics.increment(routed.endpoint);

    if routed.endpoint == UNKNOWN_ENDPOINT && !request.path().is_empty() {
        warn!(%peer, path = request.path(), "endpoint desconocido");
    }

    let bytes = routed.response.to_bytes();
    match stream.write(&bytes) {
        Ok(written) if written < bytes.len() => {
            warn!(%peer, written, expected = bytes.len(), "escritura parcial de la respuesta");
        }
        Ok(_) => {}
        Err(e) => {
            error!(%peer, path = request.path(), error = %e, "error enviando la respuesta");
        }
    }

    info!(
        %peer,
        method = request.method(),
        path = request.path(),
        endpoint = routed.endpoint,
        status = routed.response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request atendido"
    );

    close(stream, peer);
}

/// Lee `?block=N` como segundos de demora
///
/// Un valor no numérico o fuera de rango se loguea y se ignora.
pub fn requested_delay(request: &Request) -> Option<Duration> {
    let value = request.query_param(BLOCK_PARAM)?;

    match value.parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(e) => {
            warn!(
                path = request.path(),
                value,
                error = %e,
                "parámetro block inválido, se ignora"
            );
            None
        }
    }
}

fn close(stream: TcpStream, peer: SocketAddr) {
    // El peer pudo haber cerrado ya; el drop cierra el descriptor igual
    if let Err(e) = stream.shutdown(Shutdown::Both) {
        debug!(%peer, error = %e, "shutdown del socket falló");
    }
}

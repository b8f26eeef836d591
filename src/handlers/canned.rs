//! # Respuestas fijas
//! src/handlers/canned.rs
//!
//! Handlers que no calculan nada: siempre devuelven el mismo texto.

use crate::http::{Request, Response, StatusCode};

pub const HELLO_BODY: &str = "Hello, World!\n";
pub const BYE_BODY: &str = "Goodbye!\n";
pub const HEALTH_BODY: &str = "Server is healthy!\n";
pub const NOT_FOUND_BODY: &str = "Unknown endpoint\n";

/// Handler para /hello
pub fn hello_handler(_req: &Request) -> Response {
    Response::text(StatusCode::Ok, HELLO_BODY)
}

/// Handler para /bye
pub fn bye_handler(_req: &Request) -> Response {
    Response::text(StatusCode::Ok, BYE_BODY)
}

/// Handler para /health
pub fn health_handler(_req: &Request) -> Response {
    Response::text(StatusCode::Ok, HEALTH_BODY)
}

/// Respuesta para cualquier path sin ruta registrada
pub fn not_found() -> Response {
    Response::text(StatusCode::NotFound, NOT_FOUND_BODY)
}

//! # Construcción de Respuestas
//!
//! Las respuestas del servidor no son HTTP/1.1 completo: la status line y
//! los headers terminan en `\n` (no `\r\n`) y solo se envía `Content-Type`.
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-Type: text/plain\n
//! \n
//! Hello, World!\n
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use metrics_server::http::{Response, StatusCode};
//!
//! let response = Response::text(StatusCode::Ok, "Hello, World!\n");
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\n"));
//! ```

use super::StatusCode;

/// Content type por defecto de todas las rutas de texto
pub const TEXT_PLAIN: &str = "text/plain";

/// Representa una respuesta completa lista para serializar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado (200 o 404)
    status: StatusCode,

    /// Valor del único header que se emite
    content_type: String,

    /// Cuerpo de la respuesta
    body: String,
}

impl Response {
    /// Crea una respuesta vacía con `Content-Type: text/plain`
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN.to_string(),
            body: String::new(),
        }
    }

    /// Crea una respuesta `text/plain` con el cuerpo dado
    pub fn text(status: StatusCode, body: &str) -> Self {
        Self::new(status).with_body(body)
    }

    /// Reemplaza el content type
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    /// Establece el cuerpo de la respuesta
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// No se agrega `Content-Length`: el cliente lee hasta que el servidor
    /// cierra la conexión.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {}\nContent-Type: {}\n\n{}",
            self.status, self.content_type, self.body
        )
        .into_bytes()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.content_type(), "text/plain");
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_to_bytes_uses_bare_newlines() {
        let response = Response::text(StatusCode::NotFound, "Unknown endpoint\n");
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert_eq!(
            text,
            "HTTP/1.1 404 Not Found\nContent-Type: text/plain\n\nUnknown endpoint\n"
        );
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_custom_content_type() {
        let response = Response::new(StatusCode::Ok)
            .with_content_type("text/plain; version=0.0.4; charset=utf-8")
            .with_body("x 1\n");
        let text = String::from_utf8(response.to_bytes()).unwrap();

        assert!(text.starts_with(
            "HTTP/1.1 200 OK\nContent-Type: text/plain; version=0.0.4; charset=utf-8\n\n"
        ));
        assert!(text.ends_with("x 1\n"));
    }

    #[test]
    fn test_empty_body_response() {
        let text = String::from_utf8(Response::new(StatusCode::Ok).to_bytes()).unwrap();
        assert!(text.ends_with("\n\n"));
    }
}

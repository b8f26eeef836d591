//! # Módulo HTTP
//!
//! Implementa el protocolo de texto simplificado del servidor. Parece
//! HTTP pero no lo es del todo:
//!
//! - El request line no necesita versión (`GET /hello\r\n` es válido)
//! - No hay chunked transfer encoding ni conexiones persistentes
//! - Las respuestas separan headers con `\n`, no con `\r\n`
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path?query=value\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! body
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-Type: text/plain\n
//! \n
//! Hello, World!\n
//! ```

pub mod reader;    // Lectura de bytes del socket
pub mod request;   // Parsing de requests
pub mod response;  // Construcción de responses
pub mod status;    // Códigos de estado

// Re-exportamos los tipos principales para facilitar su uso
pub use reader::{RequestReader, SingleRead};
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;

//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! - `tcp`: acceptor; escucha en un puerto y lanza un thread por conexión
//! - `connection`: lee, parsea, enruta, cuenta y responde una conexión

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{handle_connection, ConnectionContext};
pub use tcp::Server;

//! # Errores del servidor
//! src/error.rs
//!
//! Solo los errores de arranque son valores de error: los errores de una
//! conexión se loguean y se resuelven dentro del handler de conexión.

use std::io;
use thiserror::Error;

/// Errores fatales de arranque. El proceso termina con status != 0.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuración inválida
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// La dirección no resuelve a ningún SocketAddr
    #[error("could not resolve address {address}: {source}")]
    Resolve {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Falló la creación del socket
    #[error("socket creation failed for {address}: {source}")]
    Socket {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Falló el bind
    #[error("bind failed on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// Falló el listen
    #[error("listen failed on {address}: {source}")]
    Listen {
        address: String,
        #[source]
        source: io::Error,
    },
}

/// Valores de configuración inválidos
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("backlog must be >= 1")]
    ZeroBacklog,

    #[error("read buffer size must be >= 1")]
    ZeroBufferSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ServerError::Bind {
            address: "0.0.0.0:8080".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "bind failed on 0.0.0.0:8080: address in use");

        let err: ServerError = ConfigError::ZeroBacklog.into();
        assert_eq!(err.to_string(), "invalid configuration: backlog must be >= 1");
    }
}

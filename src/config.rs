//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//! Los valores por defecto son los del protocolo: puerto 8080, backlog de
//! 3 conexiones pendientes y un buffer de lectura de 1024 bytes.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./metrics_server --port 8080 --log-file /var/log/server/server.log
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=9000 LOG_LEVEL=debug ./metrics_server
//! ```

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "metrics_server")]
#[command(about = "Servidor TCP concurrente con rutas fijas y métricas de requests")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Conexiones pendientes que el sistema operativo encola antes del accept
    #[arg(long, default_value = "3", env = "HTTP_BACKLOG")]
    pub backlog: i32,

    /// Tamaño del único buffer de lectura por conexión (los requests más
    /// largos se truncan)
    #[arg(long = "buffer-size", default_value = "1024", env = "READ_BUFFER_SIZE")]
    pub buffer_size: usize,

    // === Logging ===

    /// Archivo de log adicional (modo append); sin él solo se loguea a consola
    #[arg(long = "log-file", env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Filtro de nivel de log (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use metrics_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.backlog < 1 {
            return Err(ConfigError::ZeroBacklog);
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            backlog: 3,
            buffer_size: 1024,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

//! # Metrics Server
//! src/lib.rs
//!
//! Servidor TCP concurrente que interpreta un protocolo de texto parecido
//! a HTTP, responde un puñado de rutas fijas y cuenta los requests por
//! endpoint.
//!
//! ## Arquitectura
//!
//! ```text
//! Acceptor ──spawn──▶ Connection Handler ──▶ Request Parser
//!                            │
//!                            ├──▶ Router ──▶ handlers (+ snapshot de métricas)
//!                            └──▶ MetricsRegistry (un solo lock)
//! ```
//!
//! - `http`: Lectura, parsing de requests y construcción de responses
//! - `router`: Enrutamiento por path exacto
//! - `handlers`: Respuestas fijas y exposición de métricas
//! - `metrics`: Contadores compartidos entre threads
//! - `server`: Acceptor y handler de conexión
//! - `config`, `logging`, `error`: Configuración CLI, logging y errores de arranque
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use metrics_server::config::Config;
//! use metrics_server::logging;
//! use metrics_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config.clone(), logging::build_dispatch(&config));
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod metrics;
pub mod router;
pub mod server;

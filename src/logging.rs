//! # Logging
//! src/logging.rs
//!
//! Construye el [`Dispatch`] de `tracing` que usa todo el servidor. No se
//! instala como subscriber global: el handle se pasa al acceptor y a cada
//! thread de conexión, que lo activan con
//! [`tracing::dispatcher::with_default`].
//!
//! Sinks:
//! - Consola (stdout), siempre
//! - Archivo en modo append, opcional; las escrituras se serializan con un
//!   `Mutex<File>`

use crate::config::Config;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Crea el dispatch de logging a partir de la configuración
///
/// Nunca falla: si el archivo de log no se puede abrir o el filtro es
/// inválido, se loguea un warning y se sigue con consola / `info`.
pub fn build_dispatch(config: &Config) -> Dispatch {
    let mut warnings = Vec::new();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|e| {
            warnings.push(format!(
                "filtro de log inválido {:?} ({}), usando {}",
                config.log_level, e, DEFAULT_FILTER
            ));
            EnvFilter::new(DEFAULT_FILTER)
        });

    let file_layer = match config.log_file.as_deref() {
        Some(path) => match open_log_file(path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
            Err(e) => {
                warnings.push(format!(
                    "no se pudo abrir el archivo de log {}: {}",
                    path.display(),
                    e
                ));
                None
            }
        },
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout))
        .with(file_layer);
    let dispatch = Dispatch::new(subscriber);

    if !warnings.is_empty() {
        tracing::dispatcher::with_default(&dispatch, || {
            for warning in &warnings {
                tracing::warn!("{}", warning);
            }
        });
    }

    dispatch
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_log_path(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("metrics_server_{}_{}.log", name, nanos))
    }

    #[test]
    fn test_log_file_receives_events() {
        let path = temp_log_path("events");
        let config = Config {
            log_file: Some(path.clone()),
            log_level: "info".to_string(),
            ..Config::default()
        };

        let dispatch = build_dispatch(&config);
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::info!(peer = "127.0.0.1:5000", "conexión aceptada");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO"));
        assert!(contents.contains("conexión aceptada"));
        assert!(contents.contains("peer=\"127.0.0.1:5000\""));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_log_file_is_appended() {
        let path = temp_log_path("append");
        std::fs::write(&path, "previous line\n").unwrap();
        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };

        let dispatch = build_dispatch(&config);
        tracing::dispatcher::with_default(&dispatch, || tracing::warn!("nuevo"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previous line\n"));
        assert!(contents.contains("nuevo"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unopenable_log_file_is_not_fatal() {
        let config = Config {
            log_file: Some("/nonexistent-dir/metrics_server/server.log".into()),
            ..Config::default()
        };

        let dispatch = build_dispatch(&config);
        // Sigue siendo usable
        tracing::dispatcher::with_default(&dispatch, || tracing::info!("consola"));
    }

    #[test]
    fn test_capture_writer() {
        let logs = capture::CapturedLogs::default();
        tracing::dispatcher::with_default(&logs.dispatch(), || {
            tracing::warn!(path = "/hello", "algo raro");
        });

        let contents = logs.contents();
        assert!(contents.contains("WARN"));
        assert!(contents.contains("algo raro"));
        assert!(contents.contains("path=\"/hello\""));
    }
}

//! # Registro de Métricas
//! src/metrics/registry.rs
//!
//! Contadores compartidos por todos los threads de conexión. Un solo lock
//! protege tanto los incrementos como los snapshots.

use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Bucket donde se cuentan los requests que no matchean ninguna ruta
pub const UNKNOWN_ENDPOINT: &str = "unknown";

/// Registro de métricas thread-safe
///
/// Clonar el registro comparte el mismo estado interno.
#[derive(Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<Mutex<MetricsState>>,
}

/// Datos internos de métricas
#[derive(Default)]
struct MetricsState {
    /// Contador total de requests procesados
    total_requests: u64,

    /// Requests por endpoint (path de la ruta o "unknown")
    requests_per_endpoint: BTreeMap<String, u64>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra un request completado
    ///
    /// Incrementa el total y el bucket del endpoint bajo el mismo lock, así
    /// un snapshot nunca ve uno sin el otro.
    pub fn increment(&self, endpoint: &str) {
        let mut state = self.inner.lock();

        state.total_requests += 1;
        *state
            .requests_per_endpoint
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    /// Copia consistente de los contadores actuales
    pub fn snapshot(&self) -> MetricsSnapshot {
        let state = self.inner.lock();

        MetricsSnapshot {
            total_requests: state.total_requests,
            requests_per_endpoint: state.requests_per_endpoint.clone(),
        }
    }
}

/// Snapshot de métricas (para renderizar `/metrics`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    /// Ordenado por label crudo
    pub requests_per_endpoint: BTreeMap<String, u64>,
}

impl MetricsSnapshot {
    pub fn endpoint_count(&self, endpoint: &str) -> u64 {
        self.requests_per_endpoint.get(endpoint).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_registry_is_empty() {
        let snapshot = MetricsRegistry::new().snapshot();

        assert_eq!(snapshot.total_requests, 0);
        assert!(snapshot.requests_per_endpoint.is_empty());
    }

    #[test]
    fn test_increment() {
        let registry = MetricsRegistry::new();

        registry.increment("/health");
        registry.increment("/health");
        registry.increment(UNKNOWN_ENDPOINT);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.total_requests, 3);
        assert_eq!(snapshot.endpoint_count("/health"), 2);
        assert_eq!(snapshot.endpoint_count("unknown"), 1);
        assert_eq!(snapshot.endpoint_count("/bye"), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let registry = MetricsRegistry::new();
        let clone = registry.clone();

        clone.increment("/hello");

        assert_eq!(registry.snapshot().total_requests, 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let registry = MetricsRegistry::new();
        registry.increment("/hello");

        let before = registry.snapshot();
        registry.increment("/hello");

        assert_eq!(before.endpoint_count("/hello"), 1);
        assert_eq!(registry.snapshot().endpoint_count("/hello"), 2);
    }

    #[test]
    fn test_concurrent_increments() {
        let registry = MetricsRegistry::new();
        let endpoints = ["/health", "/hello", "/bye", "/metrics", UNKNOWN_ENDPOINT];

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let registry = registry.clone();
                let endpoint = endpoints[i % endpoints.len()];
                thread::spawn(move || {
                    for _ in 0..100 {
                        registry.increment(endpoint);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.total_requests, 5000);
        assert_eq!(snapshot.requests_per_endpoint.values().sum::<u64>(), 5000);
        for endpoint in endpoints {
            assert_eq!(snapshot.endpoint_count(endpoint), 1000);
        }
    }
}

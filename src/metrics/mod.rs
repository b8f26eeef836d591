//! # Sistema de Métricas
//! src/metrics/mod.rs
//!
//! Contadores de requests del proceso:
//! - Total de requests procesados
//! - Requests por endpoint

pub mod registry;

pub use registry::{MetricsRegistry, MetricsSnapshot, UNKNOWN_ENDPOINT};

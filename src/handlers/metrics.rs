//! # Exposición de Métricas
//! src/handlers/metrics.rs
//!
//! Renderiza un [`MetricsSnapshot`] en formato de texto tipo Prometheus:
//!
//! ```text
//! # HELP http_requests_total Total number of HTTP requests.
//! # TYPE http_requests_total counter
//! http_requests_total 2
//!
//! # HELP http_requests_endpoint_total Total number of HTTP requests per endpoint.
//! # TYPE http_requests_endpoint_total counter
//! http_requests_endpoint_total{endpoint="_health"} 1
//! http_requests_endpoint_total{endpoint="unknown"} 1
//! ```

use crate::http::{Request, Response, StatusCode};
use crate::metrics::{MetricsRegistry, MetricsSnapshot};
use std::fmt;

pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

const TOTAL_METRIC: &str = "http_requests_total";
const ENDPOINT_METRIC: &str = "http_requests_endpoint_total";

/// Handler para /metrics
///
/// Toma el snapshot bajo el lock del registro y lo renderiza fuera de él.
pub fn metrics_handler(_req: &Request, registry: &MetricsRegistry) -> Response {
    let snapshot = registry.snapshot();

    Response::new(StatusCode::Ok)
        .with_content_type(METRICS_CONTENT_TYPE)
        .with_body(&render_exposition(&snapshot))
}

/// Renderiza el snapshot completo
pub fn render_exposition(snapshot: &MetricsSnapshot) -> String {
    Exposition(snapshot).to_string()
}

/// Vista de un snapshot en formato de exposición
pub struct Exposition<'a>(pub &'a MetricsSnapshot);

impl fmt::Display for Exposition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        writeln!(f, "# HELP {} Total number of HTTP requests.", TOTAL_METRIC)?;
        writeln!(f, "# TYPE {} counter", TOTAL_METRIC)?;
        writeln!(f, "{} {}", TOTAL_METRIC, snapshot.total_requests)?;
        writeln!(f)?;

        writeln!(
            f,
            "# HELP {} Total number of HTTP requests per endpoint.",
            ENDPOINT_METRIC
        )?;
        writeln!(f, "# TYPE {} counter", ENDPOINT_METRIC)?;
        for (endpoint, count) in &snapshot.requests_per_endpoint {
            writeln!(
                f,
                "{}{{endpoint=\"{}\"}} {}",
                ENDPOINT_METRIC,
                sanitize_label(endpoint),
                count
            )?;
        }

        Ok(())
    }
}

/// Reemplaza todo carácter no alfanumérico por `_`
///
/// "/health" → "_health"
pub fn sanitize_label(endpoint: &str) -> String {
    endpoint
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

//! # Handlers de las rutas
//!
//! - **canned**: `/hello`, `/bye`, `/health` y el 404, todos con texto fijo
//! - **metrics**: `/metrics`, renderizado a partir del registro de métricas
//!
//! Cada handler recibe un Request y retorna una Response.

pub mod canned;
pub mod metrics;

pub use canned::{bye_handler, health_handler, hello_handler, not_found};
pub use metrics::{metrics_handler, render_exposition, sanitize_label};

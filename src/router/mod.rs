//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea paths a handlers por comparación exacta de strings.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//!                 ↘ endpoint label (para métricas)
//! ```
//!
//! Si no hay handler para el path (incluyendo el path vacío de un request
//! malformado), retorna el 404 fijo y el label `"unknown"`.

use crate::handlers;
use crate::http::{Request, Response};
use crate::metrics::{MetricsRegistry, UNKNOWN_ENDPOINT};

/// Un handler recibe un Request y retorna una Response
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Resultado de enrutar un request
#[derive(Debug)]
pub struct Routed<'a> {
    pub response: Response,
    /// Path de la ruta que matcheó, o `"unknown"`
    pub endpoint: &'a str,
}

/// Router que mapea paths a handlers
pub struct Router {
    routes: Vec<(String, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Router con las rutas del servidor: `/health`, `/hello`, `/bye` y `/metrics`
    pub fn with_default_routes(metrics: MetricsRegistry) -> Self {
        let mut router = Self::new();

        router.register("/health", handlers::health_handler);
        router.register("/hello", handlers::hello_handler);
        router.register("/bye", handlers::bye_handler);
        router.register("/metrics", move |req: &Request| {
            handlers::metrics_handler(req, &metrics)
        });

        router
    }

    /// Registra una ruta con su handler
    ///
    /// Si el path ya estaba registrado gana el primer registro.
    ///
    /// # Ejemplo
    /// ```
    /// use metrics_server::router::Router;
    /// use metrics_server::http::{Request, Response, StatusCode};
    ///
    /// let mut router = Router::new();
    /// router.register("/ping", |_req: &Request| Response::text(StatusCode::Ok, "pong\n"));
    ///
    /// let routed = router.route(&Request::parse("GET /ping\r\n\r\n"));
    /// assert_eq!(routed.endpoint, "/ping");
    /// ```
    pub fn register<F>(&mut self, path: &str, handler: F)
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.routes.push((path.to_string(), Box::new(handler)));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request) -> Routed<'_> {
        let path = request.path();

        for (route_path, handler) in &self.routes {
            if route_path == path {
                return Routed {
                    response: handler(request),
                    endpoint: route_path,
                };
            }
        }

        Routed {
            response: handlers::not_found(),
            endpoint: UNKNOWN_ENDPOINT,
        }
    }

    /// Paths registrados, en orden de registro
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(path, _)| path.as_str())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.paths().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;

    fn default_router() -> (Router, MetricsRegistry) {
        let metrics = MetricsRegistry::new();
        (Router::with_default_routes(metrics.clone()), metrics)
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new();
        assert_eq!(router.paths().count(), 0);
    }

    #[test]
    fn test_default_routes() {
        let (router, _) = default_router();
        let paths: Vec<_> = router.paths().collect();

        assert_eq!(paths, vec!["/health", "/hello", "/bye", "/metrics"]);
    }

    #[test]
    fn test_route_found() {
        let (router, _) = default_router();

        let routed = router.route(&Request::parse("GET /hello\r\n\r\n"));

        assert_eq!(routed.response.status(), StatusCode::Ok);
        assert_eq!(routed.response.body(), "Hello, World!\n");
        assert_eq!(routed.endpoint, "/hello");
    }

    #[test]
    fn test_route_not_found() {
        let (router, _) = default_router();

        let routed = router.route(&Request::parse("GET /unknown\r\n\r\n"));

        assert_eq!(routed.response.status(), StatusCode::NotFound);
        assert_eq!(routed.response.body(), "Unknown endpoint\n");
        assert_eq!(routed.endpoint, "unknown");
    }

    #[test]
    fn test_malformed_request_line_is_not_found() {
        let (router, _) = default_router();

        let routed = router.route(&Request::parse("GET\r\n"));

        assert_eq!(routed.response.status(), StatusCode::NotFound);
        assert_eq!(routed.endpoint, UNKNOWN_ENDPOINT);
    }

    #[test]
    fn test_exact_match_only() {
        let (router, _) = default_router();

        for path in ["/hello/", "/HELLO", "/hello/world", "hello"] {
            let request = Request::parse(&format!("GET {}\r\n\r\n", path));
            assert_eq!(router.route(&request).endpoint, "unknown", "path {}", path);
        }
    }

    #[test]
    fn test_query_does_not_affect_match() {
        let (router, _) = default_router();

        let routed = router.route(&Request::parse("GET /bye?x=1\r\n\r\n"));

        assert_eq!(routed.endpoint, "/bye");
    }

    #[test]
    fn test_metrics_route_reads_registry() {
        let (router, metrics) = default_router();
        metrics.increment("/health");

        let routed = router.route(&Request::parse("GET /metrics\r\n\r\n"));

        assert_eq!(routed.endpoint, "/metrics");
        assert!(routed.response.body().contains("http_requests_total 1\n"));
        // Enrutar no cuenta: eso lo hace el handler de conexión
        assert_eq!(metrics.snapshot().total_requests, 1);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut router = Router::new();
        router.register("/x", |_req: &Request| Response::text(StatusCode::Ok, "first"));
        router.register("/x", |_req: &Request| Response::text(StatusCode::Ok, "second"));

        let routed = router.route(&Request::parse("GET /x\r\n\r\n"));
        assert_eq!(routed.response.body(), "first");
    }
}

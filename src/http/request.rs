//! # Parsing de Requests
//! src/http/request.rs
//!
//! Parser del formato de texto simplificado que acepta el servidor.
//! No es HTTP/1.1 completo: no se valida el método, no se decodifican
//! escapes `%XX` y no existe header folding.
//!
//! ## Formato de un Request
//!
//! ```text
//! GET /hello?block=2\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! cuerpo opcional
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path?query` (tokens separados por un espacio)
//! 2. **Headers**: Pares `Name: Value` hasta la primera línea vacía
//! 3. **Body**: Todas las líneas restantes unidas con `\n`
//!
//! El parser nunca falla. Un request line con menos de dos tokens deja
//! `method` y `path` vacíos, y el router lo trata como ruta desconocida.

use std::collections::HashMap;

/// Representa un request parseado
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Método tal como llegó (ej: "GET"), sin validar
    method: String,

    /// Path de la petición (ej: "/hello"); vacío si el request line era inválido
    path: String,

    /// Query parameters parseados (ej: {"block": "2"})
    query_params: HashMap<String, String>,

    /// Headers con los nombres tal como llegaron, sin normalizar mayúsculas
    headers: HashMap<String, String>,

    /// Líneas restantes después de los headers, unidas con `\n`
    body: String,
}

impl Request {
    /// Parsea un request desde los bytes leídos del socket
    ///
    /// Los bytes que no son UTF-8 válido se reemplazan por `U+FFFD`.
    pub fn from_bytes(buffer: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(buffer))
    }

    /// Parsea un request desde texto
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use metrics_server::http::Request;
    ///
    /// let request = Request::parse("GET /hello?x=1\r\nHost: a\r\n\r\n");
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/hello");
    /// assert_eq!(request.query_param("x"), Some("1"));
    /// assert_eq!(request.header("Host"), Some("a"));
    /// assert_eq!(request.body(), "");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut request = Request::default();
        let mut lines = raw.lines().map(strip_cr);

        // 1. Request line
        if let Some(line) = lines.next() {
            request.parse_request_line(line);
        }

        // 2. Headers hasta la línea vacía
        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(": ") {
                request.headers.insert(name.to_string(), value.to_string());
            }
        }

        // 3. Body
        request.body = lines.collect::<Vec<_>>().join("\n");

        request
    }

    /// Parsea la request line: `METHOD PATH[?QUERY] [VERSION]`
    fn parse_request_line(&mut self, line: &str) {
        let parts = split_tokens(line, ' ');
        if parts.len() < 2 {
            return;
        }

        self.method = parts[0].to_string();

        let target = strip_cr(parts[1]);
        match target.split_once('?') {
            Some((path, query)) => {
                self.path = path.to_string();
                self.query_params = parse_query_string(query);
            }
            None => self.path = target.to_string(),
        }
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    /// Obtiene un query parameter específico
    ///
    /// # Ejemplo
    /// ```
    /// use metrics_server::http::Request;
    ///
    /// let request = Request::parse("GET /hello?block=2\r\n\r\n");
    ///
    /// assert_eq!(request.query_param("block"), Some("2"));
    /// assert_eq!(request.query_param("missing"), None);
    /// ```
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(|s| s.as_str())
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header; el nombre se compara exactamente
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Parsea una query string en un HashMap
///
/// Ejemplo: "a=1&flag&a=2" retorna {"a": "2"}. Los parámetros sin `=`
/// se descartan y los duplicados se quedan con el último valor.
fn parse_query_string(query: &str) -> HashMap<String, String> {
    split_tokens(query, '&')
        .into_iter()
        .filter_map(|param| param.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Separa por un delimitador sin producir un token vacío al final
///
/// "GET " produce ["GET"], igual que "GET".
fn split_tokens(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts: Vec<&str> = s.split(delimiter).collect();
    if parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

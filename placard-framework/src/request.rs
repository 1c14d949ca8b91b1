use std::collections::HashMap;
use std::env;
use std::io::Read;

use serde::Serialize;

/// Immutable snapshot of everything the host environment knows about the
/// inbound request, captured once at startup. Dispatch only needs `path()`;
/// the rest is opaque pass-through data for controllers.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RequestSnapshot {
    query: HashMap<String, String>,
    body: HashMap<String, String>,
    cookies: HashMap<String, String>,
    server_vars: HashMap<String, String>,
}

impl RequestSnapshot {
    pub fn new(
        query: HashMap<String, String>,
        body: HashMap<String, String>,
        cookies: HashMap<String, String>,
        server_vars: HashMap<String, String>,
    ) -> RequestSnapshot {
        RequestSnapshot {
            query,
            body,
            cookies,
            server_vars,
        }
    }

    /// Capture the request from the CGI environment: process variables,
    /// `QUERY_STRING`, `HTTP_COOKIE`, and for a form-urlencoded POST the
    /// request body on stdin.
    pub fn from_env() -> RequestSnapshot {
        let server_vars: HashMap<String, String> = env::vars().collect();
        let body_raw = read_form_body(&server_vars);
        RequestSnapshot::from_raw(server_vars, &body_raw)
    }

    fn from_raw(server_vars: HashMap<String, String>, body_raw: &str) -> RequestSnapshot {
        let query = server_vars
            .get("QUERY_STRING")
            .map(|raw| parse_form_pairs(raw))
            .unwrap_or_default();
        let cookies = server_vars
            .get("HTTP_COOKIE")
            .map(|raw| parse_cookie_pairs(raw))
            .unwrap_or_default();
        let body = parse_form_pairs(body_raw);

        RequestSnapshot {
            query,
            body,
            cookies,
            server_vars,
        }
    }

    /// The request path used for dispatch: `REQUEST_URI` without its query
    /// suffix, falling back to `PATH_INFO`, then to `/` when the environment
    /// carries neither.
    pub fn path(&self) -> &str {
        let uri = self
            .server_vars
            .get("REQUEST_URI")
            .or_else(|| self.server_vars.get("PATH_INFO"))
            .map(String::as_str)
            .unwrap_or("/");

        match uri.find('?') {
            Some(index) => &uri[..index],
            None => uri,
        }
    }

    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    pub fn body(&self) -> &HashMap<String, String> {
        &self.body
    }

    pub fn cookies(&self) -> &HashMap<String, String> {
        &self.cookies
    }

    pub fn server_vars(&self) -> &HashMap<String, String> {
        &self.server_vars
    }
}

fn read_form_body(server_vars: &HashMap<String, String>) -> String {
    let is_post = server_vars
        .get("REQUEST_METHOD")
        .is_some_and(|method| method == "POST");
    let is_form = server_vars
        .get("CONTENT_TYPE")
        .is_some_and(|content_type| content_type.starts_with("application/x-www-form-urlencoded"));
    if !is_post || !is_form {
        return String::new();
    }

    let length = server_vars
        .get("CONTENT_LENGTH")
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(0);

    let mut body = String::new();
    if std::io::stdin().take(length).read_to_string(&mut body).is_err() {
        return String::new();
    }
    body
}

/// Parse `a=1&b=two` form pairs, percent-decoding keys and values. A segment
/// without `=` becomes a key with an empty value.
fn parse_form_pairs(raw: &str) -> HashMap<String, String> {
    raw.split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(segment), String::new()),
        })
        .collect()
}

fn parse_cookie_pairs(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => (key.to_string(), decode_component(value)),
            None => (segment.to_string(), String::new()),
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

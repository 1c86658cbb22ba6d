//! Session cookie helpers.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use uuid::Uuid;

/// Find the session id in the request's `Cookie` headers. Malformed values
/// are treated as absent.
pub fn session_id(headers: &HeaderMap, name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to `id`.
pub fn set_session(name: &str, id: Uuid) -> String {
    format!("{name}={id}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that removes the session cookie.
pub fn clear_session(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

//! Error-message normalization for API failure payloads.
//!
//! The server is inconsistent about failure shapes: some endpoints return a
//! bare string, some `{"error": ".."}`, some `{"message": ".."}`. Callers
//! always get one human-readable string.

use serde_json::Value;

/// Extract a message from a response body, if it carries one.
///
/// Priority: string body (raw text or JSON string), `.error` string field,
/// `.message` string field.
pub(crate) fn from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(s)) => non_empty(s),
        Ok(Value::Object(map)) => {
            if let Some(Value::String(s)) = map.get("error") {
                return non_empty(s.clone());
            }
            if let Some(Value::String(s)) = map.get("message") {
                return non_empty(s.clone());
            }
            None
        }
        // Not JSON at all: the body itself is the message
        Err(_) => Some(trimmed.to_string()),
        Ok(_) => None,
    }
}

/// Normalize a failure into a single message.
///
/// Priority: response body (see [`from_body`]), the transport error's own
/// message, else the caller-supplied fallback.
pub(crate) fn normalize(body: Option<&str>, transport: Option<&str>, fallback: &str) -> String {
    if let Some(body) = body
        && let Some(message) = from_body(body)
    {
        return message;
    }

    if let Some(transport) = transport
        && !transport.trim().is_empty()
    {
        return transport.to_string();
    }

    fallback.to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

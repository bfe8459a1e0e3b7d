use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::RELAY_USER_AGENT;
use crate::handlers::relay_error::RelayError;
use crate::AppState;

/// Forwards an admission inquiry to the admissions API and mirrors its answer.
///
/// The raw request bytes go upstream untouched; decoding only decides whether
/// the body is worth sending at all.
pub async fn relay_inquiry(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, RelayError> {
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    match decode_document(&body) {
        Some(value) if is_truthy(&value) => {}
        _ => return Err(RelayError::InvalidJson),
    }

    let upstream = state
        .http_client
        .post(&state.upstream_url)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json")
        .header(header::USER_AGENT, RELAY_USER_AGENT)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!("Admissions upstream unreachable: {}", e);
            RelayError::from(e)
        })?;

    let status = upstream.status();
    let payload = upstream.bytes().await.map_err(|e| {
        warn!("Failed to read admissions upstream body: {}", e);
        RelayError::from(e)
    })?;
    debug!("Admissions upstream answered {} ({} bytes)", status, payload.len());

    Ok((status, [(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// Deepest array/object nesting a request document may use.
const MAX_NESTING_DEPTH: usize = 512;

/// Decodes a whole request document, allowing nesting up to
/// [`MAX_NESTING_DEPTH`] instead of serde_json's default of 128.
fn decode_document(raw: &[u8]) -> Option<Value> {
    if nesting_depth(raw) > MAX_NESTING_DEPTH {
        return None;
    }
    let mut deserializer = serde_json::Deserializer::from_slice(raw);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer).ok()?;
    deserializer.end().ok()?;
    Some(value)
}

/// Deepest bracket nesting outside of string literals.
fn nesting_depth(raw: &[u8]) -> usize {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for &byte in raw {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Mirrors how loosely typed backends treat a decoded document in a boolean
/// context: empty containers, zero, "", "0", false and null are all "no data".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

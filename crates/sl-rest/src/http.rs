//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After`, non-success with
//! a PostgREST error body) and row decoding so the request code stays small.

use serde::Deserialize;
use sl_core::entities::RawRecord;

use crate::error::RestError;

/// Error body PostgREST sends with non-success responses.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`RestError::RateLimited`] (60 s when the
///   `Retry-After` header is absent or unparseable).
/// - **Non-success status** → [`RestError::Api`] with the PostgREST
///   `message`, the raw body, or the status reason when the body is empty.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RestError> {
    if resp.status() == 429 {
        return Err(RestError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(RestError::Api {
            status: status.as_u16(),
            message: error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").into()),
        });
    }
    Ok(resp)
}

/// Pull a human-readable message out of an error body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => {
            tracing::debug!(
                code = err.code.as_deref(),
                details = err.details.as_deref(),
                hint = err.hint.as_deref(),
                "postgrest error"
            );
            Some(err.message)
        }
        Err(_) => Some(body.to_string()),
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Decode a representation body into rows.
///
/// PostgREST returns a JSON array; an empty body (e.g. `204 No Content`)
/// reads as no rows.
pub fn parse_rows(body: &str) -> Result<Vec<RawRecord>, RestError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| RestError::Parse(e.to_string()))
}

//! Shared reporting for failed API responses.
//!
//! Both upstream APIs put their error detail in the response body, GitHub
//! under `message` and Freshdesk under `errors`. Every non-success branch
//! in the clients funnels through here so failures always log the same
//! shape: status code, canonical reason, provider detail.

use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::error;

/// Log a failed API response at error level and hand back its status.
///
/// Consumes the response to read the body. A body that is not valid JSON
/// logs the detail as absent rather than raising a secondary error.
pub async fn log_response_errors(response: Response, message: &str) -> StatusCode {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log_error_body(status, &body, message);
    status
}

/// Log a failed API exchange when the body has already been read.
pub fn log_error_body(status: StatusCode, body: &str, message: &str) {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|parsed| error_detail(&parsed));

    error!(
        status = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("unknown"),
        errors = %detail.as_deref().unwrap_or("none"),
        "{message}"
    );
}

/// Provider-supplied error detail: Freshdesk's `errors` list, or the
/// `message` field GitHub and Freshdesk both use for plain errors.
fn error_detail(body: &Value) -> Option<String> {
    body.get("errors")
        .or_else(|| body.get("message"))
        .map(Value::to_string)
}

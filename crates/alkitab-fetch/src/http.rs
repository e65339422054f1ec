//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After` parsing,
//! non-success → [`FetchError::Api`]) so the bulk and GraphQL modules stay
//! focused on request construction and response mapping.

use crate::error::FetchError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`FetchError::RateLimited`], reading
///   `Retry-After` (60 s if absent or unparseable). Nothing retries; the
///   value is reported in the diagnostic.
/// - **Non-success status** → [`FetchError::Api`] with status and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    if resp.status() == 429 {
        return Err(FetchError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(FetchError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read a successful response body as JSON.
pub async fn json_body(resp: reqwest::Response) -> Result<serde_json::Value, FetchError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

//! Metrics definitions for the Audio Token Service.
//!
//! All metrics follow Prometheus naming conventions:
//! - `audio_` prefix
//! - `_total` suffix for counters
//! - `_seconds` suffix for duration histograms
//!
//! # Cardinality
//!
//! Labels are bounded:
//! - `operation`: `token`, `initialize`
//! - `status`: `success`, `error` (plus `timeout` for HTTP)
//! - `endpoint`: the fixed route table, session ids replaced by a placeholder

use metrics::{counter, histogram};
use std::time::Duration;

// ============================================================================
// Token Issuance Metrics
// ============================================================================

/// Record a token issuance attempt.
///
/// Metric: `audio_token_issuance_total`, `audio_token_issuance_duration_seconds`
/// Labels: `operation`, `status`
pub fn record_token_issuance(operation: &str, status: &str, duration: Duration) {
    histogram!("audio_token_issuance_duration_seconds",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());

    counter!("audio_token_issuance_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record an acknowledged termination request.
///
/// Metric: `audio_session_terminations_total`
pub fn record_session_termination() {
    counter!("audio_session_terminations_total").increment(1);
}

// ============================================================================
// HTTP Request Metrics
// ============================================================================

/// Record HTTP request completion.
///
/// Metric: `audio_http_requests_total`, `audio_http_request_duration_seconds`
/// Labels: `method`, `endpoint`, `status` / `status_code`
pub fn record_http_request(method: &str, endpoint: &str, status_code: u16, duration: Duration) {
    let normalized_endpoint = normalize_endpoint(endpoint);
    let status = categorize_status_code(status_code);

    histogram!("audio_http_request_duration_seconds",
        "method" => method.to_string(),
        "endpoint" => normalized_endpoint.clone(),
        "status" => status.to_string()
    )
    .record(duration.as_secs_f64());

    counter!("audio_http_requests_total",
        "method" => method.to_string(),
        "endpoint" => normalized_endpoint,
        "status_code" => status_code.to_string()
    )
    .increment(1);
}

/// Categorize HTTP status code into success/error/timeout
fn categorize_status_code(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "success",
        408 | 504 => "timeout",
        _ => "error",
    }
}

/// Normalize endpoint path to bound label cardinality.
fn normalize_endpoint(path: &str) -> String {
    match path {
        "/api/audio/token" | "/api/audio/initialize" | "/api/health" | "/metrics" => {
            path.to_string()
        }
        _ if path.starts_with("/api/audio/terminate/") => {
            "/api/audio/terminate/{session_id}".to_string()
        }
        _ => "/other".to_string(),
    }
}

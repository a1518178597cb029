//! Observability for the Audio Token Service.
//!
//! # Privacy by Default
//!
//! Handlers use `#[instrument(skip_all)]` and log fields explicitly:
//! - **SAFE**: room names, status labels, durations
//! - **HASHED**: participant identities (`hash_for_correlation`)
//! - **NEVER**: signed tokens, the API secret, caller metadata

pub mod metrics;

use sha2::{Digest, Sha256};

/// Hash a field value for correlation in logs (SHA-256, first 8 hex chars).
///
/// Not a secrecy mechanism; it keeps participant ids out of log lines while
/// still letting one request's entries be matched up.
pub fn hash_for_correlation(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    hex::encode(result.get(..4).unwrap_or_default())
}

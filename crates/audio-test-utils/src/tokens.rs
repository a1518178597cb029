//! Signing credentials and token helpers for tests.

use audio_service::crypto::{self, AccessClaims, SigningCredentials};
use secrecy::SecretString;

/// API key used by every test server.
pub const TEST_API_KEY: &str = "APItestharness";

/// API secret used by every test server.
pub const TEST_API_SECRET: &str = "test-harness-secret-value";

/// Credentials matching `TEST_API_KEY` / `TEST_API_SECRET`.
pub fn test_credentials() -> SigningCredentials {
    SigningCredentials::new(TEST_API_KEY, SecretString::from(TEST_API_SECRET))
}

/// Verify a token with the test credentials and return its claims.
///
/// # Panics
///
/// Panics if the token does not verify.
pub fn decode_test_token(token: &str) -> AccessClaims {
    crypto::verify_access_token(token, &test_credentials())
        .unwrap_or_else(|e| panic!("token should verify with test credentials: {e}"))
}

/// Decode the embedded metadata string of a token as JSON.
///
/// # Panics
///
/// Panics if the token does not verify or its metadata is not an object.
pub fn decode_test_metadata(token: &str) -> serde_json::Map<String, serde_json::Value> {
    decode_test_token(token)
        .metadata_object()
        .unwrap_or_else(|e| panic!("token metadata should be a JSON object: {e}"))
}

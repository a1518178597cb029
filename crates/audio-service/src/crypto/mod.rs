//! Access token claims, signing and verification.
//!
//! Tokens are HS256 JWTs in the LiveKit access-token format: the API key is
//! the issuer, the participant identity is the subject, permissions live in
//! the `video` grant and caller data travels as a JSON *string* in
//! `metadata`. The media service verifies them with the shared API secret.

use crate::errors::IssuanceError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// API key/secret pair shared with the media service.
///
/// The secret is a `SecretString`, so derived Debug output is redacted.
#[derive(Debug, Clone)]
pub struct SigningCredentials {
    pub api_key: String,
    pub api_secret: SecretString,
}

impl SigningCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: SecretString) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret,
        }
    }

    fn validate(&self) -> Result<(), IssuanceError> {
        if self.api_key.is_empty() {
            return Err(IssuanceError::InvalidCredentials(
                "API key is empty".to_string(),
            ));
        }
        if self.api_secret.expose_secret().is_empty() {
            return Err(IssuanceError::InvalidCredentials(
                "API secret is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Room permissions embedded in a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl VideoGrant {
    /// Join, publish and subscribe, scoped to exactly `room`.
    pub fn participant(room: &str) -> Self {
        Self {
            room_join: true,
            room: room.to_string(),
            can_publish: true,
            can_subscribe: true,
        }
    }
}

/// JWT claims of an access token.
///
/// `sub` carries the participant identity and is redacted in Debug output.
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String, // API key
    pub sub: String, // Participant identity
    pub nbf: i64,
    pub exp: i64,
    pub jti: String, // Session id
    pub video: VideoGrant,
    pub metadata: String, // JSON-encoded metadata object
}

impl fmt::Debug for AccessClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessClaims")
            .field("iss", &self.iss)
            .field("sub", &"[REDACTED]")
            .field("nbf", &self.nbf)
            .field("exp", &self.exp)
            .field("jti", &self.jti)
            .field("video", &self.video)
            .field("metadata", &"[REDACTED]")
            .finish()
    }
}

impl AccessClaims {
    /// Parse the embedded metadata string back into a JSON object.
    pub fn metadata_object(&self) -> Result<serde_json::Map<String, serde_json::Value>, IssuanceError> {
        serde_json::from_str(&self.metadata)
            .map_err(|e| IssuanceError::InvalidToken(format!("metadata is not a JSON object: {}", e)))
    }

    /// The `session_id` recorded in the token's metadata, if any.
    pub fn session_id(&self) -> Option<String> {
        self.metadata_object()
            .ok()?
            .get("session_id")?
            .as_str()
            .map(|s| s.to_string())
    }
}

/// Sign access token claims with HS256.
#[instrument(skip_all)]
pub fn sign_access_token(
    claims: &AccessClaims,
    credentials: &SigningCredentials,
) -> Result<String, IssuanceError> {
    credentials.validate()?;

    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".to_string());

    let encoding_key = EncodingKey::from_secret(credentials.api_secret.expose_secret().as_bytes());

    encode(&header, claims, &encoding_key)
        .map_err(|e| IssuanceError::Signing(format!("JWT signing operation failed: {}", e)))
}

/// Verify an access token the way the media service does.
///
/// Validates:
/// - HS256 signature under the API secret
/// - Issuer equals the API key
/// - Expiration (`exp`) and not-before (`nbf`)
#[instrument(skip_all)]
pub fn verify_access_token(
    token: &str,
    credentials: &SigningCredentials,
) -> Result<AccessClaims, IssuanceError> {
    credentials.validate()?;

    let decoding_key = DecodingKey::from_secret(credentials.api_secret.expose_secret().as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);
    validation.set_issuer(&[credentials.api_key.as_str()]);

    let token_data = decode::<AccessClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(target: "crypto", error = %e, "Token verification failed");
        IssuanceError::InvalidToken("The access token is invalid or expired".to_string())
    })?;

    Ok(token_data.claims)
}

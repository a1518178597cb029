use crate::crypto::{self, AccessClaims, SigningCredentials, VideoGrant};
use crate::errors::IssuanceError;
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Token validity window in seconds (1 hour).
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Metadata key the issuer always writes the session id under.
pub const SESSION_ID_KEY: &str = "session_id";

/// Result of a successful issuance.
#[derive(Clone)]
pub struct IssuedToken {
    pub signed_token: String,
    pub session_id: String,
    pub room: String,
    pub identity: String,
}

/// Builds and signs room access tokens.
///
/// Holds only read-only credentials, so one instance is shared across all
/// requests without locking.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    credentials: SigningCredentials,
}

impl TokenIssuer {
    pub fn new(credentials: SigningCredentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &SigningCredentials {
        &self.credentials
    }

    /// Issue a token letting `identity` join, publish and subscribe in `room`.
    ///
    /// A fresh session id is generated and written into the metadata under
    /// `session_id`. A caller-supplied `session_id` is overwritten.
    pub fn issue_token(
        &self,
        identity: &str,
        room: &str,
        caller_metadata: Option<Map<String, Value>>,
    ) -> Result<IssuedToken, IssuanceError> {
        if identity.is_empty() {
            return Err(IssuanceError::InvalidRequest(
                "user_id must not be empty".to_string(),
            ));
        }
        if room.is_empty() {
            return Err(IssuanceError::InvalidRequest(
                "room_name must not be empty".to_string(),
            ));
        }

        let session_id = Uuid::new_v4().to_string();

        let mut metadata = caller_metadata.unwrap_or_default();
        if metadata.contains_key(SESSION_ID_KEY) {
            tracing::debug!(
                target: "audio.token",
                "Overwriting caller-supplied session_id in metadata"
            );
        }
        metadata.insert(SESSION_ID_KEY.to_string(), Value::String(session_id.clone()));

        // The media service expects metadata as a single string claim
        let metadata = serde_json::to_string(&metadata)?;

        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            iss: self.credentials.api_key.clone(),
            sub: identity.to_string(),
            nbf: now,
            exp: now + TOKEN_TTL_SECONDS,
            jti: session_id.clone(),
            video: VideoGrant::participant(room),
            metadata,
        };

        let signed_token = crypto::sign_access_token(&claims, &self.credentials)?;

        Ok(IssuedToken {
            signed_token,
            session_id,
            room: room.to_string(),
            identity: identity.to_string(),
        })
    }

    /// Verify a token previously produced by this issuer.
    pub fn verify_token(&self, token: &str) -> Result<AccessClaims, IssuanceError> {
        crypto::verify_access_token(token, &self.credentials)
    }
}

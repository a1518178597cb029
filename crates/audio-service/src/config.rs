//! Audio Token Service configuration.
//!
//! Configuration is loaded from environment variables. The API secret is
//! held as a `SecretString` and never appears in Debug output.

use crate::crypto::SigningCredentials;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";

/// Default media-service URL handed to clients.
pub const DEFAULT_LIVEKIT_URL: &str = "ws://localhost:7880";

/// Default graceful-shutdown drain period in seconds.
pub const DEFAULT_DRAIN_SECONDS: u64 = 0;

/// Service configuration.
///
/// Signing credentials are read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:8001").
    pub bind_address: String,

    /// Media-service URL. Accepted for compatibility but not used by
    /// token issuance.
    pub livekit_url: String,

    /// API key/secret pair used to sign access tokens.
    pub credentials: SigningCredentials,

    /// Seconds to wait for in-flight requests after a shutdown signal.
    pub drain_seconds: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("livekit_url", &self.livekit_url)
            .field("api_key", &self.credentials.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("drain_seconds", &self.drain_seconds)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid credential configuration: {0}")]
    InvalidCredential(String),

    #[error("Invalid drain period configuration: {0}")]
    InvalidDrainSeconds(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let api_key = vars
            .get("LIVEKIT_API_KEY")
            .ok_or_else(|| ConfigError::MissingEnvVar("LIVEKIT_API_KEY".to_string()))?
            .clone();

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidCredential(
                "LIVEKIT_API_KEY must not be empty".to_string(),
            ));
        }

        let api_secret = SecretString::from(
            vars.get("LIVEKIT_API_SECRET")
                .ok_or_else(|| ConfigError::MissingEnvVar("LIVEKIT_API_SECRET".to_string()))?
                .clone(),
        );

        if api_secret.expose_secret().is_empty() {
            return Err(ConfigError::InvalidCredential(
                "LIVEKIT_API_SECRET must not be empty".to_string(),
            ));
        }

        let livekit_url = vars
            .get("LIVEKIT_URL")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LIVEKIT_URL.to_string());

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let drain_seconds = if let Some(value_str) = vars.get("DRAIN_SECONDS") {
            value_str.parse::<u64>().map_err(|e| {
                ConfigError::InvalidDrainSeconds(format!(
                    "DRAIN_SECONDS must be a valid non-negative integer, got '{}': {}",
                    value_str, e
                ))
            })?
        } else {
            DEFAULT_DRAIN_SECONDS
        };

        Ok(Config {
            bind_address,
            livekit_url,
            credentials: SigningCredentials::new(api_key, api_secret),
            drain_seconds,
        })
    }
}

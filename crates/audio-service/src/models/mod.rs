//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/audio/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub user_id: String,
    pub room_name: String,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// Response of `POST /api/audio/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub session_id: String,
    pub room: String,
    pub user_id: String,
}

/// Body of `POST /api/audio/initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    pub user_id: String,
    pub room_name: String,
}

/// Response of `POST /api/audio/initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub token: String,
    pub room: String,
}

/// Response of `DELETE /api/audio/terminate/{session_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminateResponse {
    pub status: String,
    pub message: String,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

//! Audio room handlers.
//!
//! Token issuance plus the inert session lifecycle endpoints. Failures are
//! logged here with the (hashed) participant and room, then turned into an
//! HTTP response by `AudioError`.

use crate::errors::{AudioError, IssuanceError};
use crate::models::{
    SessionRequest, SessionResponse, TerminateResponse, TokenRequest, TokenResponse,
};
use crate::observability::hash_for_correlation;
use crate::observability::metrics::{record_session_termination, record_token_issuance};
use crate::routes::AppState;
use crate::services::{session_service, IssuedToken};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Handler for POST /api/audio/token
///
/// Issues a room access token carrying the caller's metadata plus a freshly
/// generated `session_id`.
///
/// ## Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIs...",
///   "session_id": "0b1c9c3e-8d0e-4b5c-9f0e-1f2a3b4c5d6e",
///   "room": "room42",
///   "user_id": "alice"
/// }
/// ```
#[instrument(skip_all, name = "audio.handlers.token")]
pub async fn create_token(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AudioError> {
    let Json(request) = payload.map_err(|e| AudioError::BadRequest(e.body_text()))?;

    info!(
        target: "audio.handlers.token",
        user = %hash_for_correlation(&request.user_id),
        room = %request.room_name,
        "Token request received"
    );

    let issued = issue_recorded("token", &request.user_id, &request.room_name, || {
        state
            .issuer
            .issue_token(&request.user_id, &request.room_name, request.metadata)
    })?;

    info!(
        target: "audio.handlers.token",
        session_id = %issued.session_id,
        "Token generated successfully"
    );

    Ok(Json(TokenResponse {
        token: issued.signed_token,
        session_id: issued.session_id,
        room: issued.room,
        user_id: issued.identity,
    }))
}

/// Handler for POST /api/audio/initialize
///
/// Issues a token whose metadata holds only the new session id. Responds
/// with 201 Created.
#[instrument(skip_all, name = "audio.handlers.initialize")]
pub async fn initialize_session(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>), AudioError> {
    let Json(request) = payload.map_err(|e| AudioError::BadRequest(e.body_text()))?;

    info!(
        target: "audio.handlers.initialize",
        user = %hash_for_correlation(&request.user_id),
        room = %request.room_name,
        "Initializing session"
    );

    let issued = issue_recorded("initialize", &request.user_id, &request.room_name, || {
        session_service::initialize(&state.issuer, &request.user_id, &request.room_name)
    })?;

    info!(
        target: "audio.handlers.initialize",
        session_id = %issued.session_id,
        room = %issued.room,
        "Session initialized"
    );

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: issued.session_id,
            token: issued.signed_token,
            room: issued.room,
        }),
    ))
}

/// Handler for DELETE /api/audio/terminate/{session_id}
///
/// Always succeeds. No session store exists, so the id is not checked and
/// previously issued tokens stay valid until they expire.
#[instrument(skip_all, name = "audio.handlers.terminate")]
pub async fn terminate_session(Path(session_id): Path<String>) -> Json<TerminateResponse> {
    info!(
        target: "audio.handlers.terminate",
        session_id = %session_id,
        "Terminating session"
    );

    record_session_termination();

    Json(TerminateResponse {
        status: "success".to_string(),
        message: session_service::terminate(&session_id),
    })
}

/// Run an issuance, timing it and logging any failure with request context.
fn issue_recorded(
    operation: &str,
    user_id: &str,
    room: &str,
    issue: impl FnOnce() -> Result<IssuedToken, IssuanceError>,
) -> Result<IssuedToken, AudioError> {
    let start = Instant::now();
    let result = issue();

    match &result {
        Ok(_) => record_token_issuance(operation, "success", start.elapsed()),
        Err(e) => {
            record_token_issuance(operation, "error", start.elapsed());
            error!(
                target: "audio.handlers",
                operation = operation,
                user = %hash_for_correlation(user_id),
                room = %room,
                error = %e,
                "Error generating token"
            );
        }
    }

    result.map_err(AudioError::from)
}

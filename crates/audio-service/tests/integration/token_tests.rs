//! Token issuance endpoint tests.

use audio_service::services::TOKEN_TTL_SECONDS;
use audio_test_utils::{decode_test_metadata, decode_test_token, TestAudioServer, TEST_API_KEY};
use reqwest::StatusCode;
use serde_json::json;

async fn request_token(
    server: &TestAudioServer,
    body: serde_json::Value,
) -> Result<reqwest::Response, anyhow::Error> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/audio/token", server.url()))
        .json(&body)
        .send()
        .await?;
    Ok(response)
}

/// `alice` / `room42` with empty metadata decodes to the expected claims.
#[tokio::test]
async fn test_token_claims_for_alice_in_room42() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = request_token(
        &server,
        json!({"user_id": "alice", "room_name": "room42", "metadata": {}}),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["user_id"], "alice");
    assert_eq!(body["room"], "room42");

    let session_id = body["session_id"].as_str().unwrap_or_default();
    let token = body["token"].as_str().unwrap_or_default();

    let claims = decode_test_token(token);
    assert_eq!(claims.iss, TEST_API_KEY);
    assert_eq!(claims.sub, "alice");
    assert!(claims.video.room_join);
    assert_eq!(claims.video.room, "room42");
    assert!(claims.video.can_publish);
    assert!(claims.video.can_subscribe);
    assert_eq!(claims.exp - claims.nbf, TOKEN_TTL_SECONDS);

    let metadata = decode_test_metadata(token);
    assert_eq!(
        serde_json::Value::Object(metadata),
        json!({"session_id": session_id})
    );

    Ok(())
}

/// Caller metadata is carried through and the session id is injected.
#[tokio::test]
async fn test_caller_metadata_is_embedded() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = request_token(
        &server,
        json!({
            "user_id": "bob",
            "room_name": "design-review",
            "metadata": {"display_name": "Bob", "prefs": {"muted": true}}
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    let metadata = decode_test_metadata(body["token"].as_str().unwrap_or_default());

    assert_eq!(metadata.get("display_name"), Some(&json!("Bob")));
    assert_eq!(metadata.get("prefs"), Some(&json!({"muted": true})));
    assert_eq!(metadata.get("session_id"), Some(&body["session_id"]));

    Ok(())
}

/// A caller-supplied `session_id` is replaced by the generated one.
#[tokio::test]
async fn test_caller_session_id_is_overwritten() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = request_token(
        &server,
        json!({
            "user_id": "alice",
            "room_name": "room42",
            "metadata": {"session_id": "caller-chosen"}
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    assert_ne!(body["session_id"], "caller-chosen");

    let metadata = decode_test_metadata(body["token"].as_str().unwrap_or_default());
    assert_eq!(metadata.get("session_id"), Some(&body["session_id"]));

    Ok(())
}

/// Identical requests get different session ids and different tokens.
#[tokio::test]
async fn test_identical_requests_are_fresh() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;
    let request = json!({"user_id": "alice", "room_name": "room42"});

    let first: serde_json::Value = request_token(&server, request.clone()).await?.json().await?;
    let second: serde_json::Value = request_token(&server, request).await?.json().await?;

    assert_ne!(first["session_id"], second["session_id"]);
    assert_ne!(first["token"], second["token"]);

    Ok(())
}

/// Empty identity or room is rejected with an error body and no token.
#[tokio::test]
async fn test_empty_identity_returns_400() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = request_token(&server, json!({"user_id": "", "room_name": "room42"})).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await?;
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.contains("user_id")));
    assert!(body.get("token").is_none());

    Ok(())
}

/// Missing required fields produce the `{error}` envelope.
#[tokio::test]
async fn test_missing_room_name_returns_400() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = request_token(&server, json!({"user_id": "alice"})).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await?;
    assert!(body["error"].as_str().is_some());

    Ok(())
}

/// Non-object metadata is rejected before any token is produced.
#[tokio::test]
async fn test_non_object_metadata_returns_400() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = request_token(
        &server,
        json!({"user_id": "alice", "room_name": "room42", "metadata": "not-a-map"}),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await?;
    assert!(body["error"].as_str().is_some());
    assert!(body.get("token").is_none());

    Ok(())
}

/// Responses carry permissive CORS headers for browser clients.
#[tokio::test]
async fn test_token_response_has_cors_header() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = reqwest::Client::new()
        .post(format!("{}/api/audio/token", server.url()))
        .header("origin", "https://app.example.com")
        .json(&json!({"user_id": "alice", "room_name": "room42"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    Ok(())
}

//! Session initialize/terminate endpoint tests.
//!
//! Both endpoints are inert: initialize issues a token, terminate only
//! acknowledges.

use audio_test_utils::{decode_test_metadata, decode_test_token, TestAudioServer};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_initialize_returns_201_with_session() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/audio/initialize", server.url()))
        .json(&json!({"user_id": "alice", "room_name": "room42"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["room"], "room42");

    let session_id = body["session_id"].as_str().unwrap_or_default();
    let token = body["token"].as_str().unwrap_or_default();

    let claims = decode_test_token(token);
    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.video.room, "room42");

    let metadata = decode_test_metadata(token);
    assert_eq!(metadata.len(), 1, "metadata should hold only session_id");
    assert_eq!(metadata.get("session_id"), Some(&json!(session_id)));

    Ok(())
}

#[tokio::test]
async fn test_initialize_ignores_metadata_field() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/audio/initialize", server.url()))
        .json(&json!({"user_id": "alice", "room_name": "room42", "metadata": {"a": 1}}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await?;
    let metadata = decode_test_metadata(body["token"].as_str().unwrap_or_default());
    assert!(metadata.get("a").is_none());

    Ok(())
}

#[tokio::test]
async fn test_terminate_unknown_session_succeeds() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/api/audio/terminate/anything", server.url()))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body,
        json!({"status": "success", "message": "Session anything terminated"})
    );

    Ok(())
}

#[tokio::test]
async fn test_terminate_does_not_invalidate_token() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(format!("{}/api/audio/initialize", server.url()))
        .json(&json!({"user_id": "alice", "room_name": "room42"}))
        .send()
        .await?
        .json()
        .await?;

    let session_id = body["session_id"].as_str().unwrap_or_default().to_string();
    let token = body["token"].as_str().unwrap_or_default().to_string();

    let response = client
        .delete(format!("{}/api/audio/terminate/{}", server.url(), session_id))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    // No session store: the token is still valid after termination
    let claims = decode_test_token(&token);
    assert_eq!(claims.session_id().as_deref(), Some(session_id.as_str()));

    Ok(())
}

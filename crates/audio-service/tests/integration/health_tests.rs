//! Health and operational endpoint tests.

use audio_test_utils::TestAudioServer;
use reqwest::StatusCode;

/// `/api/health` returns 200 with `{"status": "healthy"}`.
#[tokio::test]
async fn test_health_endpoint_returns_healthy() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = reqwest::get(format!("{}/api/health", server.url())).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({"status": "healthy"}));

    Ok(())
}

/// Non-existent routes return 404.
#[tokio::test]
async fn test_unknown_route_returns_404() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = reqwest::get(format!("{}/api/audio/nonexistent", server.url())).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Wrong method on a known route returns 405.
#[tokio::test]
async fn test_wrong_method_returns_405() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = reqwest::get(format!("{}/api/audio/token", server.url())).await?;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

/// `/metrics` is served in Prometheus text format.
#[tokio::test]
async fn test_metrics_endpoint_is_reachable() -> Result<(), anyhow::Error> {
    let server = TestAudioServer::spawn().await?;

    let response = reqwest::get(format!("{}/metrics", server.url())).await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

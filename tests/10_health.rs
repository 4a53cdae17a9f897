mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::TestServer::new();

    let (status, body) = server.send(Method::GET, "/health", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_404() -> Result<()> {
    let server = common::TestServer::new();
    let (status, _) = server.send(Method::GET, "/nope", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use cookenu_api::auth::Authenticator;
use cookenu_api::database::Storage;
use cookenu_api::AppState;

pub const SECRET: &str = "integration-test-secret";

/// In-process server backed by a fresh in-memory store
pub struct TestServer {
    app: Router,
    pub authenticator: Authenticator,
}

impl TestServer {
    pub fn new() -> Self {
        let authenticator = Authenticator::new(SECRET, 1).expect("test secret is non-empty");
        let state = AppState::new(Storage::memory(), authenticator.clone());
        Self {
            app: cookenu_api::app(state, false),
            authenticator,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .context("router failed")?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).context("response was not JSON")?
        };
        Ok((status, value))
    }

    /// Sign up and return the issued token
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<String> {
        let (status, body) = self
            .send(
                Method::POST,
                "/users/signup",
                None,
                Some(serde_json::json!({ "name": name, "email": email, "password": password })),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::CREATED, "signup failed: {} {}", status, body);
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("signup response had no token")
    }
}

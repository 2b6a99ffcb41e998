#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use budgetbuddy_server::{
    api::app_router,
    auth::AuthManager,
    build_state,
    config::{Config, LogFormat},
};
use rand::{rngs::OsRng, RngCore};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    /// Signs tokens with the app's own secret.
    pub auth: Arc<AuthManager>,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempdir().unwrap();
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);

    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        jwt_secret: secret.to_vec(),
        token_ttl: Duration::from_secs(3600),
        log_format: LogFormat::Text,
    };
    let state = build_state(&config).await.unwrap();
    TestApp {
        auth: state.auth.clone(),
        router: app_router(state, &config),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    /// Registers an account and returns its access token.
    pub async fn register(&self, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/register",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "password": "correct horse",
                    "name": "Test User",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Creates (or fetches) a category and returns its id.
    pub async fn category(&self, token: &str, name: &str, kind: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/categories",
                token,
                serde_json::json!({ "name": name, "type": kind }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "category failed: {body}");
        body["id"].as_i64().unwrap()
    }
}

#![allow(dead_code)]

use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use simple_inventory::{app_router, config::AppConfig, AppState};
use tower::ServiceExt;

/// Helper harness driving the full router in-process against a fresh in-memory store.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(cfg: AppConfig) -> Self {
        let state = AppState::in_memory(cfg);
        Self {
            router: app_router(state.clone()),
            state,
        }
    }

    /// Send a request with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let raw = body.map(|json| {
            serde_json::to_string(&json).expect("failed to serialize json request body")
        });
        self.request_raw(method, uri, raw.as_deref()).await
    }

    /// Send a request whose body is sent verbatim as `application/json`.
    pub async fn request_raw(&self, method: Method, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(raw) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(raw.to_string())
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Method::GET, uri, None).await
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        client_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/frontend").to_string(),
        ..AppConfig::default()
    }
}

pub async fn response_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes")
        .to_vec()
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response_bytes(response).await;
    serde_json::from_slice(&bytes).expect("json response")
}

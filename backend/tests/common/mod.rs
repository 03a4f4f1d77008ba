//! Common test utilities for integration tests
//!
//! Builds the full router over either store, with no external services.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use workout_tracker_backend::config::{
    AppConfig, DatabaseConfig, ServerConfig, StorageBackend, StorageConfig,
};
use workout_tracker_backend::repositories::{MemoryStore, SqliteStore, Store};
use workout_tracker_backend::{routes, state::AppState};

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub store: Arc<dyn Store>,
}

impl TestApp {
    /// Create a test application over a fresh store
    pub async fn new(backend: StorageBackend) -> Self {
        let config = test_config(backend);

        let store: Arc<dyn Store> = match backend {
            StorageBackend::Sqlite => Arc::new(
                SqliteStore::open(&config.database)
                    .await
                    .expect("Failed to open in-memory SQLite store"),
            ),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        };

        let state = AppState::new(store.clone());
        let app = routes::create_router(state);

        Self { app, store }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send(json_request("POST", path, body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send(json_request("PUT", path, body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// GET and parse the body as JSON
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(path).await;
        (status, parse(&body))
    }

    /// POST a JSON value and parse the response as JSON
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        (status, parse(&body))
    }

    /// Log a workout and return its resolved calories
    pub async fn log_workout(&self, body: Value) -> i64 {
        let (status, response) = self.post_json("/api/workouts", &body).await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {}", response);
        response["calories_burned"].as_i64().unwrap()
    }

    /// Create a goal and return its id
    pub async fn create_goal(&self, body: Value) -> i64 {
        let (status, response) = self.post_json("/api/goals", &body).await;
        assert_eq!(status, StatusCode::OK, "unexpected response: {}", response);
        response["id"].as_i64().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn json_request(method: &str, path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Parse a response body; an empty body parses to `null`
pub fn parse(body: &str) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON body {:?}: {}", body, e))
}

fn test_config(backend: StorageBackend) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        storage: StorageConfig {
            backend,
            simulated_latency_ms: 0,
        },
    }
}

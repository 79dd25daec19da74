// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use rewards_tracker::config::Config;
use rewards_tracker::db::MemoryStore;
use rewards_tracker::routes::create_router;
use rewards_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app over an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        store: Arc::new(MemoryStore::new()),
    });

    (create_router(state.clone()), state)
}

/// Send a request and decode the JSON response body (`Null` if empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Ids of the listed records, in response order.
#[allow(dead_code)]
pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

/// Check if a MongoDB test server is configured via environment variable.
#[allow(dead_code)]
pub fn mongo_available() -> bool {
    std::env::var("MONGODB_TEST_URI").is_ok()
}

/// Skip test with message if no MongoDB test server is configured.
#[macro_export]
macro_rules! require_mongo {
    () => {
        if !crate::common::mongo_available() {
            eprintln!("⚠️  Skipping: MONGODB_TEST_URI not set");
            return;
        }
    };
}

/// Connect to the test server using a fresh, uniquely named database.
#[allow(dead_code)]
pub async fn test_store() -> rewards_tracker::db::MongoStore {
    use std::time::{SystemTime, UNIX_EPOCH};

    let uri = std::env::var("MONGODB_TEST_URI").expect("MONGODB_TEST_URI not set");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    rewards_tracker::db::MongoStore::new(&uri, &format!("rewards_test_{}", nanos))
        .await
        .expect("Failed to connect to MongoDB")
}

#![allow(dead_code)] // Each test binary uses a subset of these helpers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use shelf_api::config::AppConfig;
use shelf_api::router::build_app_router;
use shelf_api::state::AppState;
use shelf_core::{CacheError, Item, ItemCache, ItemSource, SourceError};

/// Build a test `AppConfig` with fixed labels, so responses are easy to
/// assert on.
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_server: "localhost".to_string(),
        db_user: "root".to_string(),
        db_password: String::new(),
        db_database: "app".to_string(),
        redis_host: "localhost".to_string(),
        redis_port: 6379,
        version: "test-version".to_string(),
        hostname: "test-host".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given collaborator doubles.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(source: Arc<dyn ItemSource>, cache: Arc<dyn ItemCache>) -> Router {
    let config = test_config();
    let state = AppState {
        source,
        cache,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request must build"),
    )
    .await
    .expect("request must not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must be collectable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}

// ---------------------------------------------------------------------------
// Collaborator doubles
// ---------------------------------------------------------------------------

/// In-memory cache double. Shared between requests via `Arc` so a second
/// request can observe what the first one wrote.
#[derive(Default)]
pub struct MemoryCache {
    pub entries: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl ItemCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &[u8],
        _ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

/// Cache double where every operation fails with a connection error.
pub struct BrokenCache;

#[async_trait]
impl ItemCache for BrokenCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Connection("connection refused".into()))
    }

    async fn set_with_expiry(
        &self,
        _key: &str,
        _value: &[u8],
        _ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        Err(CacheError::Connection("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Err(CacheError::Connection("connection refused".into()))
    }
}

/// Source double returning a fixed collection.
pub struct FixedSource {
    pub items: Vec<Item>,
}

impl FixedSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemSource for FixedSource {
    async fn fetch_all(&self) -> Result<Vec<Item>, SourceError> {
        Ok(self.items.clone())
    }

    async fn ping(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// Source double that always fails.
pub struct FailingSource;

#[async_trait]
impl ItemSource for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<Item>, SourceError> {
        Err(SourceError::Query("access denied for user 'root'".into()))
    }

    async fn ping(&self) -> Result<(), SourceError> {
        Err(SourceError::Query("connection refused".into()))
    }
}

/// Sample item collection used across tests.
pub fn sample_items() -> Vec<Item> {
    vec![Item {
        id: 1,
        name: "a".into(),
    }]
}

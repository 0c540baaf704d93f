use std::sync::Arc;

use shelf_core::{ItemCache, ItemSource};

use crate::config::AppConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The source and cache handles are built once in `main` and never
/// reassigned; they are trait objects so integration tests can stand in
/// scripted doubles for MySQL and Redis. Cheaply cloneable (everything is
/// behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The source of record (MySQL in production).
    pub source: Arc<dyn ItemSource>,
    /// The item cache (Redis in production, or a no-op fallback).
    pub cache: Arc<dyn ItemCache>,
    /// Server configuration.
    pub config: Arc<AppConfig>,
}

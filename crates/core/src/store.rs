//! Collaborator contracts for the cache store and the source of record.

use async_trait::async_trait;

use crate::error::{CacheError, SourceError};
use crate::items::Item;

/// A key-value cache with expiry semantics (Redis in production).
///
/// Values are opaque bytes; the fetch path owns serialization. `get`
/// distinguishes an absent key (`Ok(None)`) from a transport failure
/// (`Err`), because the two are handled differently upstream.
#[async_trait]
pub trait ItemCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, expiring after `ttl_seconds`.
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: u64,
    ) -> Result<(), CacheError>;

    /// Reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), CacheError>;
}

/// The authoritative item store (MySQL in production).
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the full item collection.
    async fn fetch_all(&self) -> Result<Vec<Item>, SourceError>;

    /// Reachability probe for the health endpoint.
    async fn ping(&self) -> Result<(), SourceError>;
}

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use shelf_core::{CacheError, ItemCache};

/// Redis-backed cache over a multiplexed, auto-reconnecting connection.
///
/// The [`ConnectionManager`] is a cheap `Clone` handle; one `RedisCache`
/// is built at startup and shared across all requests. Reconnects after a
/// dropped connection are handled by the manager itself.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connect to Redis at `url` (e.g. `redis://localhost:6379`).
    ///
    /// Fails if the initial connection cannot be established; callers
    /// decide whether that is fatal (this service falls back to
    /// [`crate::NoopCache`]).
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(connection_error)?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(connection_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl ItemCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn.clone();
        let raw: Option<Vec<u8>> = conn.get(key).await.map_err(connection_error)?;
        Ok(raw)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(key, value, ttl_seconds)
            .await
            .map_err(connection_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(connection_error)?;
        Ok(())
    }
}

/// Collapse any redis error into the transport variant; the fetch path
/// treats all cache failures uniformly.
fn connection_error(err: redis::RedisError) -> CacheError {
    CacheError::Connection(err.to_string())
}

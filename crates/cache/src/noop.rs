use async_trait::async_trait;

use shelf_core::{CacheError, ItemCache};

/// Cache that never holds anything: every read is a miss and every write
/// is dropped. Used when Redis is unreachable at startup, so the service
/// keeps serving straight from the source of record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

#[async_trait]
impl ItemCache for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(None)
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        _value: &[u8],
        _ttl_seconds: u64,
    ) -> Result<(), CacheError> {
        tracing::debug!(key, "NoopCache dropping write");
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Err(CacheError::Connection("no cache configured".into()))
    }
}

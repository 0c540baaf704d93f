//! The read-through fetch over the `items` collection.
//!
//! One rule governs everything here: cache failures are never user-visible
//! (the cache is a latency optimization, not a correctness requirement),
//! while source-of-record failures always are. Every branch in
//! [`fetch_items`] exists to preserve that asymmetry.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;
use crate::store::{ItemCache, ItemSource};

/// The single well-known key the item collection is cached under.
pub const ITEMS_CACHE_KEY: &str = "items";

/// Cache entry lifetime. Staleness is bounded by exactly this window;
/// there is no active invalidation.
pub const ITEMS_TTL_SECS: u64 = 3600;

/// A row from the `items` table. The cache layer makes no assumptions
/// about these fields; it stores the JSON serialization of the whole
/// collection as opaque bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Where a fetch result came from. Observability only; callers must not
/// branch on this for correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Source,
}

/// The value returned to the request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub items: Vec<Item>,
    pub origin: Origin,
}

/// Fetch the item collection, serving from the cache when possible and
/// repopulating it from the source on a miss.
///
/// Failure policy:
/// - a cache read error is a forced miss (fail open), logged and absorbed;
/// - a cache payload that does not deserialize is likewise a forced miss;
/// - a source error propagates to the caller untouched, with no cache
///   write attempted;
/// - a cache write error after a successful query is logged and absorbed,
///   since the result is already in hand.
///
/// The three I/O steps are strictly sequential: the cache read completes
/// before the source is queried, and the query completes before the cache
/// write begins. An empty collection is a valid cacheable value and
/// round-trips as `[]`, distinct from an absent key.
pub async fn fetch_items(
    cache: &dyn ItemCache,
    source: &dyn ItemSource,
    key: &str,
) -> Result<FetchResult, SourceError> {
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_slice::<Vec<Item>>(&raw) {
            Ok(items) => {
                tracing::debug!(key, count = items.len(), "Cache hit");
                return Ok(FetchResult {
                    items,
                    origin: Origin::Cache,
                });
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "Discarding undeserializable cache entry");
            }
        },
        Ok(None) => {
            tracing::debug!(key, "Cache miss");
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "Cache unavailable, falling through to source");
        }
    }

    let items = source.fetch_all().await?;

    match serde_json::to_vec(&items) {
        Ok(raw) => {
            if let Err(err) = cache.set_with_expiry(key, &raw, ITEMS_TTL_SECS).await {
                tracing::warn!(key, error = %err, "Cache write failed, serving source result");
            }
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "Failed to serialize items for caching");
        }
    }

    Ok(FetchResult {
        items,
        origin: Origin::Source,
    })
}

//! Domain types and the read-through fetch path.
//!
//! The interesting behavior of the whole service lives in
//! [`items::fetch_items`]; everything else in the workspace is plumbing
//! around it. The cache and source collaborators are trait seams
//! ([`store::ItemCache`], [`store::ItemSource`]) so the fetch path can be
//! exercised without a running Redis or MySQL.

pub mod error;
pub mod items;
pub mod store;

pub use error::{CacheError, SourceError};
pub use items::{fetch_items, FetchResult, Item, Origin, ITEMS_CACHE_KEY, ITEMS_TTL_SECS};
pub use store::{ItemCache, ItemSource};

//! Redis-backed implementation of the [`ItemCache`] contract.
//!
//! [`RedisCache`] is the production store; [`NoopCache`] stands in when
//! Redis is unreachable at startup or when tests want a cache that always
//! misses.

mod noop;
mod redis_cache;

pub use noop::NoopCache;
pub use redis_cache::RedisCache;

pub use shelf_core::ItemCache;

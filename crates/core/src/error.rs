#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Transport or protocol failure talking to the cache store.
    #[error("cache connection error: {0}")]
    Connection(String),

    /// The cached payload could not be encoded or decoded.
    #[error("cache payload encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Any failure querying the source of record. Connectivity, syntax and
    /// constraint problems all collapse into this; the fetch path treats
    /// them uniformly as fatal.
    #[error("source query failed: {0}")]
    Query(String),
}

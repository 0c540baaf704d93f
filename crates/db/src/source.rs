use async_trait::async_trait;

use shelf_core::{Item, ItemSource, SourceError};

use crate::repositories::ItemRepo;
use crate::DbPool;

/// [`ItemSource`] over the shared MySQL pool.
///
/// All sqlx failure modes (connectivity, syntax, constraints) collapse
/// into [`SourceError::Query`]; the fetch path treats the source as an
/// opaque collaborator that either answers or fails.
#[derive(Clone)]
pub struct SqlItemSource {
    pool: DbPool,
}

impl SqlItemSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemSource for SqlItemSource {
    async fn fetch_all(&self) -> Result<Vec<Item>, SourceError> {
        ItemRepo::list_all(&self.pool).await.map_err(|err| {
            tracing::error!(error = %err, "Item query failed");
            SourceError::Query(err.to_string())
        })
    }

    async fn ping(&self) -> Result<(), SourceError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|err| SourceError::Query(err.to_string()))
    }
}

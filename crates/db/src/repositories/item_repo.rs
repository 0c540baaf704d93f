//! Repository for the `items` table.

use shelf_core::Item;

use crate::models::item::ItemRow;
use crate::DbPool;

/// Column list for `items` queries.
const ITEM_COLUMNS: &str = "id, name";

/// Read operations over the `items` table.
pub struct ItemRepo;

impl ItemRepo {
    /// Fetch the full item collection, oldest first.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id");
        let rows = sqlx::query_as::<_, ItemRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }
}

use shelf_core::Item;
use sqlx::FromRow;

/// A row from the `items` table. Converted into the domain [`Item`] at the
/// repository boundary so `shelf-core` stays free of sqlx.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
        }
    }
}

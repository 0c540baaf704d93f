use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use shelf_core::{fetch_items, Item, Origin, ITEMS_CACHE_KEY};

use crate::error::AppResult;
use crate::state::AppState;

/// The item listing payload consumed by downstream renderers.
#[derive(Serialize)]
pub struct ListingResponse {
    pub version: String,
    pub hostname: String,
    pub items: Vec<Item>,
    /// `"yes"` when the collection came from the cache, `"no"` when it
    /// came from the database.
    #[serde(rename = "cacheStatus")]
    pub cache_status: &'static str,
}

/// GET / -- the item listing with cache-status indicator.
///
/// Cache failures never surface here; only a source failure turns into a
/// 500 via [`crate::error::AppError`].
async fn list_items(State(state): State<AppState>) -> AppResult<Json<ListingResponse>> {
    let result = fetch_items(state.cache.as_ref(), state.source.as_ref(), ITEMS_CACHE_KEY).await?;

    let cache_status = match result.origin {
        Origin::Cache => "yes",
        Origin::Source => "no",
    };

    tracing::debug!(
        count = result.items.len(),
        cache_status,
        "Serving item listing"
    );

    Ok(Json(ListingResponse {
        version: state.config.version.clone(),
        hostname: state.config.hostname.clone(),
        items: result.items,
        cache_status,
    }))
}

/// Mount the listing route at the root path.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_items))
}

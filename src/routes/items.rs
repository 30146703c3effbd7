use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::extract::ValidatedQuery;
use crate::models::Item;
use crate::store::ItemStore;

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of items to skip from the start of the collection.
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of items to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Fetch a slice of the item collection.
///
/// Both parameters are optional; omitting them yields the first ten items.
/// Out-of-range offsets clamp to the collection bounds.
#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    params(ListParams),
    responses(
        (status = 200, description = "The requested slice of the collection", body = [Item]),
        (status = 422, description = "Malformed query parameter", body = QueryValidationError),
    )
)]
pub async fn handler(
    Extension(store): Extension<ItemStore>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Json<Vec<Item>> {
    Json(store.list(params.skip, params.limit).to_vec())
}

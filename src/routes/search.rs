use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::extract::ValidatedQuery;
use crate::models::SearchResults;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search query term. No default, so requests without it are rejected
    /// before this handler runs.
    pub q: String,
}

/// Search for items by query term.
///
/// Echoes the term back inside a result envelope; the result list is empty
/// in this sample.
#[utoipa::path(
    get,
    path = "/search/",
    tag = "items",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results for the query term", body = SearchResults),
        (status = 422, description = "Missing or malformed `q` parameter", body = QueryValidationError),
    )
)]
pub async fn handler(ValidatedQuery(params): ValidatedQuery<SearchParams>) -> Json<SearchResults> {
    Json(SearchResults {
        query: params.q,
        results: Vec::new(),
    })
}

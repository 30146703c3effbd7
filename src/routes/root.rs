use axum::Json;
use serde_json::{json, Value};

/// Service banner pointing at the interactive documentation.
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service name and docs location"),
    )
)]
pub async fn handler() -> Json<Value> {
    Json(json!({ "service": "items-api", "docs": "/docs" }))
}

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is up"),
    )
)]
pub async fn handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

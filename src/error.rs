use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// One failed query parameter: where it lives, what went wrong, and a coarse
/// error category (`missing` or `invalid`).
#[derive(Debug, Serialize, ToSchema)]
pub struct ParamError {
    #[schema(example = json!(["query", "q"]))]
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Rejection produced when query string extraction fails. Rendered as
/// HTTP 422 with a machine-readable `detail` list, so clients can tell which
/// parameter was missing or malformed without parsing free text.
#[derive(Debug, Serialize, ToSchema)]
pub struct QueryValidationError {
    pub detail: Vec<ParamError>,
}

impl QueryValidationError {
    /// Builds the structured payload out of the deserializer's message.
    ///
    /// A missing required field surfaces as ``missing field `q` ``; the
    /// backticked name is lifted into the `loc` path. Messages with no
    /// attributable field (e.g. integer parse failures) locate the error at
    /// the query string as a whole.
    pub fn from_message(message: &str) -> Self {
        let msg = message
            .strip_prefix("Failed to deserialize query string: ")
            .unwrap_or(message)
            .to_string();

        let mut loc = vec!["query".to_string()];
        if let Some(field) = backticked_field(&msg) {
            loc.push(field);
        }

        let kind = if msg.starts_with("missing field") {
            "missing"
        } else {
            "invalid"
        };

        QueryValidationError {
            detail: vec![ParamError {
                loc,
                msg,
                kind: kind.to_string(),
            }],
        }
    }
}

fn backticked_field(msg: &str) -> Option<String> {
    let start = msg.find('`')? + 1;
    let end = start + msg[start..].find('`')?;
    Some(msg[start..end].to_string())
}

impl IntoResponse for QueryValidationError {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

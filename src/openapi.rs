use utoipa::OpenApi;

use crate::error::{ParamError, QueryValidationError};
use crate::models::{Item, SearchResults};
use crate::routes;

/// Aggregated OpenAPI document, generated from the route annotations and
/// served interactively at `/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        description = "Minimal example API showing optional vs. required query parameters."
    ),
    paths(
        routes::root::handler,
        routes::health::handler,
        routes::items::handler,
        routes::search::handler,
    ),
    components(schemas(Item, SearchResults, QueryValidationError, ParamError)),
    tags(
        (name = "items", description = "Item listing and search"),
        (name = "system", description = "Service status"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/items/", "/search/"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn list_parameters_are_optional_and_q_is_required() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        let items_params = &json["paths"]["/items/"]["get"]["parameters"];
        for param in items_params.as_array().unwrap() {
            assert_ne!(param["required"], true, "{} should be optional", param["name"]);
        }

        let search_params = &json["paths"]["/search/"]["get"]["parameters"];
        let q = search_params
            .as_array()
            .unwrap()
            .iter()
            .find(|param| param["name"] == "q")
            .unwrap();
        assert_eq!(q["required"], true);
        assert_eq!(q["in"], "query");
    }
}

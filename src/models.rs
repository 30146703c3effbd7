use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single record in the item collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Item {
    #[schema(example = "Foo")]
    pub item_name: String,
}

impl Item {
    pub fn new(item_name: impl Into<String>) -> Self {
        Item {
            item_name: item_name.into(),
        }
    }
}

/// Envelope returned by the search endpoint: the original query term plus
/// any matching items.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct SearchResults {
    #[schema(example = "widgets")]
    pub query: String,
    pub results: Vec<Item>,
}

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::QueryValidationError;

/// Query extractor whose rejection is a structured 422 instead of axum's
/// plain-text 400. Handlers using it never see a missing or malformed
/// parameter; extraction fails before the handler body runs.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QueryValidationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => Ok(ValidatedQuery(params)),
            Err(rejection) => Err(QueryValidationError::from_message(&rejection.body_text())),
        }
    }
}

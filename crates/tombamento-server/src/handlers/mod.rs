//! HTTP handlers

pub mod detalhes;
pub mod health;
pub mod tombamentos;

pub use health::{health, stats};

use crate::error::ApiError;
use axum::{
    extract::rejection::JsonRejection,
    http::{Method, Uri},
    Json,
};

/// Unmatched path, or a known path with an unsupported method
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
        method: method.to_string(),
    }
}

/// Unwrap a JSON body. A request sent without a JSON content type counts as
/// an empty body, so validation and lookups still decide the response.
pub fn body_or_default<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

//! Fallback Handlers
//!
//! Give unmatched paths and methods the same JSON error body as the handlers.

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::shared::errors::ApiError;

/// Any path without a route
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// A known path requested with a method it does not serve
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

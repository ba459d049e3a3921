//! Request Extractors

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::errors::ApiError;

/// JSON body extractor that reports every rejection (syntax, type, missing
/// content type) as a 400 `ApiError` instead of axum's default 415/422.
///
/// Only JSON objects are accepted; derived struct decoding would otherwise
/// fill fields from an array by position.
#[derive(Debug)]
pub struct Json<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<Value>::from_request(req, state).await?;

        if !value.is_object() {
            return Err(ApiError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value).map(Json).map_err(|e| {
            ApiError::BadRequest(format!("Failed to deserialize the JSON body: {e}"))
        })
    }
}

//! JSON body extractor with uniform rejections

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON body that rejects with [`ApiError::InvalidBody`]
///
/// The `Content-Type` header is not checked; only the bytes matter. Syntax
/// errors and shape mismatches (such as a string where a number is
/// expected) are all reported the same way.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|e| ApiError::invalid_body(e.body_text()))?;

        Ok(JsonBody(value))
    }
}

//! Timeline paging extractor
//!
//! Reads `limit` and `before` from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use temuka_service::dto::TimelineParams;

use crate::response::ApiError;

/// Timeline query parameters; non-numeric values are rejected
#[derive(Debug, Clone, Copy)]
pub struct Timeline(pub TimelineParams);

#[async_trait]
impl<S> FromRequestParts<S> for Timeline
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<TimelineParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Timeline(params))
    }
}

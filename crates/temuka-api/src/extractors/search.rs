//! User search query extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use temuka_service::dto::SearchUsersQuery;

use crate::response::ApiError;

/// `?username=` filter for `GET /users`
#[derive(Debug, Clone, Default)]
pub struct UserSearch(pub SearchUsersQuery);

#[async_trait]
impl<S> FromRequestParts<S> for UserSearch
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<SearchUsersQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(UserSearch(query))
    }
}

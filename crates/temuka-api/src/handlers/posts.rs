//! Post handlers

use axum::{
    extract::{Path, State},
    Json,
};
use temuka_service::dto::{CreatePostRequest, DataResponse, MessageResponse, PostResponse};
use temuka_service::PostService;

use crate::extractors::{parse_id, Timeline, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

const INVALID_POST_ID: &str = "Invalid post id";

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Json<DataResponse<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(request).await?;
    Ok(Json(DataResponse::new("Post has been created", post)))
}

/// Newest posts first
///
/// GET /posts/timeline?limit={n}&before={post_id}
pub async fn timeline(
    State(state): State<AppState>,
    Timeline(params): Timeline,
) -> ApiResult<Json<DataResponse<Vec<PostResponse>>>> {
    let service = PostService::new(state.service_context());
    let posts = service.timeline(params).await?;
    Ok(Json(DataResponse::new(
        "Timeline posts have been retrieved",
        posts,
    )))
}

/// Like a post
///
/// PUT /posts/like/{id}
pub async fn like_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<DataResponse<PostResponse>>> {
    let post_id = parse_id(&post_id, INVALID_POST_ID)?;

    let service = PostService::new(state.service_context());
    let post = service.like_post(post_id).await?;
    Ok(Json(DataResponse::new("Post has been liked", post)))
}

/// Delete a post
///
/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let post_id = parse_id(&post_id, INVALID_POST_ID)?;

    let service = PostService::new(state.service_context());
    service.delete_post(post_id).await?;
    Ok(Json(MessageResponse::new("Post has been deleted")))
}

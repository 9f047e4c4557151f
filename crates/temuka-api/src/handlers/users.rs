//! User handlers

use axum::{
    extract::{Path, State},
    Json,
};
use temuka_service::dto::{CreateUserRequest, DataResponse, UpdateUserRequest, UserResponse};
use temuka_service::UserService;

use crate::extractors::{parse_id, UserSearch, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

const INVALID_USER_ID: &str = "Invalid user id";

/// Search users by username
///
/// GET /users?username={fragment}
pub async fn search_users(
    State(state): State<AppState>,
    UserSearch(query): UserSearch,
) -> ApiResult<Json<DataResponse<Vec<UserResponse>>>> {
    let service = UserService::new(state.service_context());
    let users = service.search_users(query).await?;
    Ok(Json(DataResponse::new("Users have been retrieved", users)))
}

/// Get user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DataResponse<UserResponse>>> {
    let user_id = parse_id(&user_id, INVALID_USER_ID)?;

    let service = UserService::new(state.service_context());
    let user = service.get_user_detail(user_id).await?;
    Ok(Json(DataResponse::new("User detail has been retrieved", user)))
}

/// Register a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<DataResponse<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Json(DataResponse::new("User has been created", user)))
}

/// Update a user
///
/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: ApiResult<ValidatedJson<UpdateUserRequest>>,
) -> ApiResult<Json<DataResponse<UserResponse>>> {
    let user_id = parse_id(&user_id, INVALID_USER_ID)?;
    let ValidatedJson(request) = body?;

    let service = UserService::new(state.service_context());
    let user = service.update_user(user_id, request).await?;
    Ok(Json(DataResponse::new("User has been updated", user)))
}

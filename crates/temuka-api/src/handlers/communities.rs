//! Community handlers
//!
//! Endpoints for creating, reading, and joining communities.

use axum::{
    extract::{Path, State},
    Json,
};
use temuka_service::dto::{
    CommunityResponse, CreateCommunityRequest, DataResponse, JoinCommunityRequest,
    MessageResponse,
};
use temuka_service::CommunityService;

use crate::extractors::{parse_id, JsonBody, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

const INVALID_COMMUNITY_ID: &str = "Invalid community id";

/// Create a new community
///
/// POST /communities
pub async fn create_community(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCommunityRequest>,
) -> ApiResult<Json<DataResponse<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let community = service.create_community(request).await?;
    Ok(Json(DataResponse::new("Community has been created", community)))
}

/// List all communities
///
/// GET /communities
pub async fn list_communities(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<CommunityResponse>>>> {
    let service = CommunityService::new(state.service_context());
    let communities = service.list_communities().await?;
    Ok(Json(DataResponse::new(
        "Communities have been retrieved",
        communities,
    )))
}

/// Get community by ID
///
/// GET /communities/{community_id}
pub async fn get_community(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
) -> ApiResult<Json<DataResponse<CommunityResponse>>> {
    let community_id = parse_id(&community_id, INVALID_COMMUNITY_ID)?;

    let service = CommunityService::new(state.service_context());
    let community = service.get_community(community_id).await?;
    Ok(Json(DataResponse::new(
        "Community detail has been retrieved",
        community,
    )))
}

/// Join a community
///
/// POST|PUT /communities/{community_id}/join
///
/// The path is checked before the body, and both before any store access.
pub async fn join_community(
    State(state): State<AppState>,
    Path(community_id): Path<String>,
    body: ApiResult<JsonBody<JoinCommunityRequest>>,
) -> ApiResult<Json<MessageResponse>> {
    let community_id = parse_id(&community_id, INVALID_COMMUNITY_ID)?;
    let JsonBody(request) = body?;

    let service = CommunityService::new(state.service_context());
    service.join_community(community_id, request).await?;
    Ok(Json(MessageResponse::new("Successfully joined the community")))
}

//! Community service
//!
//! Community creation, lookup, and the join workflow. A join runs inside one
//! unit of work: the community row is locked, the membership is checked and
//! inserted, and the member counter is bumped before a single commit.

use temuka_core::entities::{Community, CommunityMember};
use temuka_core::{DomainError, EntityId};
use tracing::{info, instrument};

use crate::dto::{CommunityResponse, CreateCommunityRequest, JoinCommunityRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new community with no members
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_community(
        &self,
        request: CreateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        let mut community =
            Community::new(request.name, request.description, request.logo_picture);

        self.ctx
            .community_repo()
            .create_community(&mut community)
            .await
            .map_err(ServiceError::storage("Error creating community"))?;

        info!(community_id = %community.id, "Community created");

        Ok(CommunityResponse::from(&community))
    }

    /// Get community by ID
    #[instrument(skip(self))]
    pub async fn get_community(&self, community_id: EntityId) -> ServiceResult<CommunityResponse> {
        let community = self
            .ctx
            .community_repo()
            .get_community_detail_by_id(community_id)
            .await
            .map_err(ServiceError::storage("Error retrieving community"))?
            .ok_or_else(|| ServiceError::not_found("Community not found"))?;

        Ok(CommunityResponse::from(&community))
    }

    /// List all communities
    #[instrument(skip(self))]
    pub async fn list_communities(&self) -> ServiceResult<Vec<CommunityResponse>> {
        let communities = self
            .ctx
            .community_repo()
            .list_communities()
            .await
            .map_err(ServiceError::storage("Error retrieving communities"))?;

        Ok(communities.iter().map(CommunityResponse::from).collect())
    }

    /// Add a user to a community and bump its member counter
    ///
    /// Returns the community as committed. Nothing is persisted unless every
    /// step succeeds.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn join_community(
        &self,
        community_id: EntityId,
        request: JoinCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        let user_id = request.user_id;

        let mut tx = self
            .ctx
            .community_repo()
            .begin()
            .await
            .map_err(ServiceError::storage("Error retrieving community"))?;

        let mut community = tx
            .get_community_detail_by_id(community_id)
            .await
            .map_err(ServiceError::storage("Error retrieving community"))?
            .ok_or_else(|| ServiceError::not_found("Community not found"))?;

        let existing = tx
            .check_membership(community_id, user_id)
            .await
            .map_err(ServiceError::storage("Error checking community membership"))?;
        if existing.is_some() {
            return Err(ServiceError::conflict("User already a member of the community"));
        }

        let member = CommunityMember::new(community_id, user_id);
        tx.add_community_member(&member)
            .await
            .map_err(|e| match e {
                DomainError::AlreadyMember => {
                    ServiceError::conflict("User already a member of the community")
                }
                other => ServiceError::internal("Error adding community member", other),
            })?;

        community.record_new_member();
        tx.update_community(community_id, &community)
            .await
            .map_err(ServiceError::storage("Error updating community"))?;
        tx.commit()
            .await
            .map_err(ServiceError::storage("Error updating community"))?;

        info!(
            community_id = %community_id,
            user_id = %user_id,
            members_count = community.members_count,
            "User joined community"
        );

        Ok(CommunityResponse::from(&community))
    }
}

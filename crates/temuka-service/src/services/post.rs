//! Post service

use temuka_core::entities::Post;
use temuka_core::traits::TimelineQuery;
use temuka_core::{DomainError, EntityId};
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostResponse, TimelineParams};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post, optionally inside a community
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        if let Some(community_id) = request.community_id {
            self.ctx
                .community_repo()
                .get_community_detail_by_id(community_id)
                .await
                .map_err(ServiceError::storage("Error creating post"))?
                .ok_or_else(|| ServiceError::not_found("Community not found"))?;
        }

        let mut post = Post::new(request.user_id, request.community_id, request.content);
        self.ctx
            .post_repo()
            .create(&mut post)
            .await
            .map_err(ServiceError::storage("Error creating post"))?;

        info!(post_id = %post.id, "Post created");

        Ok(PostResponse::from(&post))
    }

    /// Newest posts first, paged by an ID cursor
    #[instrument(skip(self))]
    pub async fn timeline(&self, params: TimelineParams) -> ServiceResult<Vec<PostResponse>> {
        let query = TimelineQuery {
            before: params.before.map(EntityId::new),
            limit: params.effective_limit(),
        };

        let posts = self
            .ctx
            .post_repo()
            .timeline(query)
            .await
            .map_err(ServiceError::storage("Error retrieving timeline"))?;

        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Add one like to a post
    #[instrument(skip(self))]
    pub async fn like_post(&self, post_id: EntityId) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .increment_likes(post_id)
            .await
            .map_err(|e| match e {
                DomainError::PostNotFound(_) => ServiceError::not_found("Post not found"),
                other => ServiceError::internal("Error liking post", other),
            })?;

        Ok(PostResponse::from(&post))
    }

    /// Delete a post
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: EntityId) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .delete(post_id)
            .await
            .map_err(|e| match e {
                DomainError::PostNotFound(_) => ServiceError::not_found("Post not found"),
                other => ServiceError::internal("Error deleting post", other),
            })?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}

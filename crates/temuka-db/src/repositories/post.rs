//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use temuka_core::entities::Post;
use temuka_core::error::DomainError;
use temuka_core::traits::{PostRepository, RepoResult, TimelineQuery};
use temuka_core::value_objects::EntityId;

use crate::models::PostModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, post), fields(user_id = %post.user_id))]
    async fn create(&self, post: &mut Post) -> RepoResult<()> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (user_id, community_id, content, likes_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, community_id, content, likes_count, created_at, updated_at
            ",
        )
        .bind(post.user_id.into_inner())
        .bind(post.community_id.map(EntityId::into_inner))
        .bind(&post.content)
        .bind(post.likes_count)
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        *post = model.into();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn timeline(&self, query: TimelineQuery) -> RepoResult<Vec<Post>> {
        let limit = query.limit.clamp(1, 100);

        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, community_id, content, likes_count, created_at, updated_at
            FROM posts
            WHERE $1::BIGINT IS NULL OR id < $1
            ORDER BY id DESC
            LIMIT $2
            ",
        )
        .bind(query.before.map(EntityId::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn increment_likes(&self, id: EntityId) -> RepoResult<Post> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET likes_count = likes_count + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, community_id, content, likes_count, created_at, updated_at
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::from).ok_or(DomainError::PostNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EntityId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }
}

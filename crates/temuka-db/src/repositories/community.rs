//! PostgreSQL implementation of CommunityRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use temuka_core::entities::{Community, CommunityMember};
use temuka_core::error::DomainError;
use temuka_core::traits::{CommunityRepository, CommunityTransaction, RepoResult};
use temuka_core::value_objects::EntityId;

use crate::models::{CommunityMemberModel, CommunityModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    /// Create a new PgCommunityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self, community), fields(name = %community.name))]
    async fn create_community(&self, community: &mut Community) -> RepoResult<()> {
        let model = sqlx::query_as::<_, CommunityModel>(
            r"
            INSERT INTO communities (name, description, logo_picture, members_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, logo_picture, members_count, created_at, updated_at
            ",
        )
        .bind(&community.name)
        .bind(&community.description)
        .bind(&community.logo_picture)
        .bind(community.members_count)
        .bind(community.created_at)
        .bind(community.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        *community = model.into();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_community_detail_by_id(&self, id: EntityId) -> RepoResult<Option<Community>> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, logo_picture, members_count, created_at, updated_at
            FROM communities
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self))]
    async fn list_communities(&self) -> RepoResult<Vec<Community>> {
        let results = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, logo_picture, members_count, created_at, updated_at
            FROM communities
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Community::from).collect())
    }

    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn CommunityTransaction>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgCommunityTransaction { tx }))
    }
}

/// A database transaction scoped to one membership change
///
/// Rolled back by `sqlx` when dropped without [`commit`](CommunityTransaction::commit).
pub struct PgCommunityTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl CommunityTransaction for PgCommunityTransaction {
    #[instrument(skip(self))]
    async fn get_community_detail_by_id(&mut self, id: EntityId) -> RepoResult<Option<Community>> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r"
            SELECT id, name, description, logo_picture, members_count, created_at, updated_at
            FROM communities
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self))]
    async fn check_membership(
        &mut self,
        community_id: EntityId,
        user_id: EntityId,
    ) -> RepoResult<Option<CommunityMember>> {
        let result = sqlx::query_as::<_, CommunityMemberModel>(
            r"
            SELECT community_id, user_id, joined_at
            FROM community_members
            WHERE community_id = $1 AND user_id = $2
            ",
        )
        .bind(community_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(CommunityMember::from))
    }

    #[instrument(skip(self))]
    async fn add_community_member(&mut self, member: &CommunityMember) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO community_members (community_id, user_id, joined_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(member.community_id.into_inner())
        .bind(member.user_id.into_inner())
        .bind(member.joined_at)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self, community))]
    async fn update_community(&mut self, id: EntityId, community: &Community) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE communities
            SET name = $2, description = $3, logo_picture = $4, members_count = $5, updated_at = $6
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(&community.name)
        .bind(&community.description)
        .bind(&community.logo_picture)
        .bind(community.members_count)
        .bind(community.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommunityNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)
    }
}

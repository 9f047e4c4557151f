//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Services receive these as trait objects,
//! so tests can bind an in-process store in place of PostgreSQL.

use async_trait::async_trait;

use crate::entities::{Community, CommunityMember, Post, User};
use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Insert a new community and write the generated ID back into it
    async fn create_community(&self, community: &mut Community) -> RepoResult<()>;

    /// Find community by ID (`None` when no row matches)
    async fn get_community_detail_by_id(&self, id: EntityId) -> RepoResult<Option<Community>>;

    /// List all communities, oldest first
    async fn list_communities(&self) -> RepoResult<Vec<Community>>;

    /// Open a unit of work for a multi-step membership change
    async fn begin(&self) -> RepoResult<Box<dyn CommunityTransaction>>;
}

/// Unit of work over communities and their members
///
/// Every operation runs in the same transaction. Nothing is visible to other
/// callers until [`commit`](CommunityTransaction::commit); dropping the handle
/// without committing rolls everything back.
#[async_trait]
pub trait CommunityTransaction: Send {
    /// Find community by ID and hold it locked until the unit of work ends
    async fn get_community_detail_by_id(&mut self, id: EntityId) -> RepoResult<Option<Community>>;

    /// Find the membership row for a (community, user) pair
    async fn check_membership(
        &mut self,
        community_id: EntityId,
        user_id: EntityId,
    ) -> RepoResult<Option<CommunityMember>>;

    /// Insert a membership row
    ///
    /// Returns `DomainError::AlreadyMember` if the pair already exists.
    async fn add_community_member(&mut self, member: &CommunityMember) -> RepoResult<()>;

    /// Persist the full community record
    async fn update_community(&mut self, id: EntityId, community: &Community) -> RepoResult<()>;

    /// Make all changes of this unit of work durable
    async fn commit(self: Box<Self>) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>>;

    /// List users, optionally filtered by a case-insensitive username fragment
    async fn search(&self, username: Option<&str>) -> RepoResult<Vec<User>>;

    /// Create a new user and write the generated ID back into it
    async fn create(&self, user: &mut User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user, replacing the password hash when given
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Cursor options for timeline queries
#[derive(Debug, Clone, Default)]
pub struct TimelineQuery {
    /// Only posts with an ID lower than this one
    pub before: Option<EntityId>,
    pub limit: i64,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post and write the generated ID back into it
    async fn create(&self, post: &mut Post) -> RepoResult<()>;

    /// List posts newest first
    async fn timeline(&self, query: TimelineQuery) -> RepoResult<Vec<Post>>;

    /// Atomically add one like and return the updated post
    async fn increment_likes(&self, id: EntityId) -> RepoResult<Post>;

    /// Delete a post
    async fn delete(&self, id: EntityId) -> RepoResult<()>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Verify the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

//! In-process store implementing every repository trait
//!
//! Backs service and HTTP tests, and local runs without PostgreSQL. A single
//! async mutex guards all tables; a unit of work holds it until it ends, which
//! gives the same serialization the row lock gives in PostgreSQL.
//!
//! Failures can be injected per operation with [`MemoryStore::fail_on`].

mod community;
mod post;
mod user;

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;
use tracing::warn;

use temuka_core::entities::{Community, CommunityMember, Post, User};
use temuka_core::error::DomainError;
use temuka_core::traits::{HealthCheck, RepoResult};
use temuka_core::value_objects::EntityId;

pub use community::MemoryCommunityTransaction;

/// Operations that can be made to fail on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    CreateCommunity,
    GetCommunity,
    ListCommunities,
    Begin,
    CheckMembership,
    AddCommunityMember,
    UpdateCommunity,
    Commit,
    FindUser,
    SearchUsers,
    CreateUser,
    UpdateUser,
    CreatePost,
    Timeline,
    LikePost,
    DeletePost,
    Ping,
}

#[derive(Default)]
struct Faults {
    armed: Mutex<HashSet<FailPoint>>,
}

impl Faults {
    fn check(&self, point: FailPoint) -> RepoResult<()> {
        let armed = self.armed.lock().unwrap_or_else(PoisonError::into_inner);
        if armed.contains(&point) {
            warn!(?point, "Injected store failure");
            return Err(DomainError::DatabaseError(format!(
                "injected failure at {point:?}"
            )));
        }
        Ok(())
    }
}

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct State {
    communities: BTreeMap<i64, Community>,
    members: BTreeMap<(i64, i64), CommunityMember>,
    users: BTreeMap<i64, StoredUser>,
    posts: BTreeMap<i64, Post>,
    last_community_id: i64,
    last_user_id: i64,
    last_post_id: i64,
}

fn next_id(last: &mut i64) -> EntityId {
    *last += 1;
    EntityId::new(*last)
}

/// Shared in-memory store; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<AsyncMutex<State>>,
    faults: Arc<Faults>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call of `point` fail with a database error
    pub fn fail_on(&self, point: FailPoint) {
        self.faults
            .armed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(point);
    }

    /// Disarm all injected failures
    pub fn clear_failures(&self) {
        self.faults
            .armed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Membership rows of a community, ordered by user ID
    pub async fn members_of(&self, community_id: EntityId) -> Vec<CommunityMember> {
        let state = self.state.lock().await;
        state
            .members
            .values()
            .filter(|m| m.community_id == community_id)
            .cloned()
            .collect()
    }

    /// Stored password hash of a user
    pub async fn password_hash_of(&self, user_id: EntityId) -> Option<String> {
        let state = self.state.lock().await;
        state
            .users
            .get(&user_id.into_inner())
            .map(|stored| stored.password_hash.clone())
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        self.faults.check(FailPoint::Ping)
    }
}

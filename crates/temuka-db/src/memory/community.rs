//! In-memory CommunityRepository and unit of work

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use temuka_core::entities::{Community, CommunityMember};
use temuka_core::error::DomainError;
use temuka_core::traits::{CommunityRepository, CommunityTransaction, RepoResult};
use temuka_core::value_objects::EntityId;

use super::{next_id, FailPoint, Faults, MemoryStore, State};

#[async_trait]
impl CommunityRepository for MemoryStore {
    async fn create_community(&self, community: &mut Community) -> RepoResult<()> {
        self.faults.check(FailPoint::CreateCommunity)?;
        let mut state = self.state.lock().await;

        community.id = next_id(&mut state.last_community_id);
        state
            .communities
            .insert(community.id.into_inner(), community.clone());
        Ok(())
    }

    async fn get_community_detail_by_id(&self, id: EntityId) -> RepoResult<Option<Community>> {
        self.faults.check(FailPoint::GetCommunity)?;
        let state = self.state.lock().await;
        Ok(state.communities.get(&id.into_inner()).cloned())
    }

    async fn list_communities(&self) -> RepoResult<Vec<Community>> {
        self.faults.check(FailPoint::ListCommunities)?;
        let state = self.state.lock().await;
        Ok(state.communities.values().cloned().collect())
    }

    async fn begin(&self) -> RepoResult<Box<dyn CommunityTransaction>> {
        self.faults.check(FailPoint::Begin)?;
        let guard = Arc::clone(&self.state).lock_owned().await;
        Ok(Box::new(MemoryCommunityTransaction {
            state: guard,
            faults: Arc::clone(&self.faults),
            staged_members: Vec::new(),
            staged_communities: BTreeMap::new(),
        }))
    }
}

/// Unit of work holding the store lock until commit or drop
///
/// Writes are staged and only applied to the tables on commit.
pub struct MemoryCommunityTransaction {
    state: OwnedMutexGuard<State>,
    faults: Arc<Faults>,
    staged_members: Vec<CommunityMember>,
    staged_communities: BTreeMap<i64, Community>,
}

impl MemoryCommunityTransaction {
    fn find_member(&self, community_id: EntityId, user_id: EntityId) -> Option<&CommunityMember> {
        self.staged_members
            .iter()
            .find(|m| m.is_pair(community_id, user_id))
            .or_else(|| {
                self.state
                    .members
                    .get(&(community_id.into_inner(), user_id.into_inner()))
            })
    }
}

#[async_trait]
impl CommunityTransaction for MemoryCommunityTransaction {
    async fn get_community_detail_by_id(&mut self, id: EntityId) -> RepoResult<Option<Community>> {
        self.faults.check(FailPoint::GetCommunity)?;
        let key = id.into_inner();
        Ok(self
            .staged_communities
            .get(&key)
            .or_else(|| self.state.communities.get(&key))
            .cloned())
    }

    async fn check_membership(
        &mut self,
        community_id: EntityId,
        user_id: EntityId,
    ) -> RepoResult<Option<CommunityMember>> {
        self.faults.check(FailPoint::CheckMembership)?;
        Ok(self.find_member(community_id, user_id).cloned())
    }

    async fn add_community_member(&mut self, member: &CommunityMember) -> RepoResult<()> {
        self.faults.check(FailPoint::AddCommunityMember)?;
        if self.find_member(member.community_id, member.user_id).is_some() {
            return Err(DomainError::AlreadyMember);
        }
        self.staged_members.push(member.clone());
        Ok(())
    }

    async fn update_community(&mut self, id: EntityId, community: &Community) -> RepoResult<()> {
        self.faults.check(FailPoint::UpdateCommunity)?;
        let key = id.into_inner();
        if !self.state.communities.contains_key(&key) {
            return Err(DomainError::CommunityNotFound(id));
        }

        let mut updated = community.clone();
        updated.id = id;
        self.staged_communities.insert(key, updated);
        Ok(())
    }

    async fn commit(mut self: Box<Self>) -> RepoResult<()> {
        self.faults.check(FailPoint::Commit)?;

        let members = std::mem::take(&mut self.staged_members);
        let communities = std::mem::take(&mut self.staged_communities);
        for member in members {
            let key = (member.community_id.into_inner(), member.user_id.into_inner());
            self.state.members.insert(key, member);
        }
        self.state.communities.extend(communities);
        Ok(())
    }
}

//! In-memory UserRepository

use async_trait::async_trait;

use temuka_core::entities::User;
use temuka_core::error::DomainError;
use temuka_core::traits::{RepoResult, UserRepository};
use temuka_core::value_objects::EntityId;

use super::{next_id, FailPoint, MemoryStore, State, StoredUser};

fn email_taken(state: &State, email: &str, except: EntityId) -> bool {
    state
        .users
        .values()
        .any(|stored| stored.user.id != except && stored.user.email == email)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<User>> {
        self.faults.check(FailPoint::FindUser)?;
        let state = self.state.lock().await;
        Ok(state
            .users
            .get(&id.into_inner())
            .map(|stored| stored.user.clone()))
    }

    async fn search(&self, username: Option<&str>) -> RepoResult<Vec<User>> {
        self.faults.check(FailPoint::SearchUsers)?;
        let needle = username
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .filter(|stored| match &needle {
                Some(n) => stored.user.username.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .map(|stored| stored.user.clone())
            .collect())
    }

    async fn create(&self, user: &mut User, password_hash: &str) -> RepoResult<()> {
        self.faults.check(FailPoint::CreateUser)?;
        let mut state = self.state.lock().await;
        if email_taken(&state, &user.email, EntityId::UNASSIGNED) {
            return Err(DomainError::EmailAlreadyExists);
        }

        user.id = next_id(&mut state.last_user_id);
        state.users.insert(
            user.id.into_inner(),
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(())
    }

    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        self.faults.check(FailPoint::UpdateUser)?;
        let mut state = self.state.lock().await;
        if email_taken(&state, &user.email, user.id) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let stored = state
            .users
            .get_mut(&user.id.into_inner())
            .ok_or(DomainError::UserNotFound(user.id))?;
        stored.user = user.clone();
        if let Some(hash) = password_hash {
            stored.password_hash = hash.to_string();
        }
        Ok(())
    }
}

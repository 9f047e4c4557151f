//! In-memory PostRepository

use async_trait::async_trait;
use chrono::Utc;

use temuka_core::entities::Post;
use temuka_core::error::DomainError;
use temuka_core::traits::{PostRepository, RepoResult, TimelineQuery};
use temuka_core::value_objects::EntityId;

use super::{next_id, FailPoint, MemoryStore};

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create(&self, post: &mut Post) -> RepoResult<()> {
        self.faults.check(FailPoint::CreatePost)?;
        let mut state = self.state.lock().await;

        post.id = next_id(&mut state.last_post_id);
        state.posts.insert(post.id.into_inner(), post.clone());
        Ok(())
    }

    async fn timeline(&self, query: TimelineQuery) -> RepoResult<Vec<Post>> {
        self.faults.check(FailPoint::Timeline)?;
        let limit = usize::try_from(query.limit.clamp(1, 100)).unwrap_or(100);
        let before = query.before.map_or(i64::MAX, EntityId::into_inner);

        let state = self.state.lock().await;
        Ok(state
            .posts
            .range(..before)
            .rev()
            .take(limit)
            .map(|(_, post)| post.clone())
            .collect())
    }

    async fn increment_likes(&self, id: EntityId) -> RepoResult<Post> {
        self.faults.check(FailPoint::LikePost)?;
        let mut state = self.state.lock().await;

        let post = state
            .posts
            .get_mut(&id.into_inner())
            .ok_or(DomainError::PostNotFound(id))?;
        post.likes_count += 1;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.faults.check(FailPoint::DeletePost)?;
        let mut state = self.state.lock().await;

        state
            .posts
            .remove(&id.into_inner())
            .map(|_| ())
            .ok_or(DomainError::PostNotFound(id))
    }
}

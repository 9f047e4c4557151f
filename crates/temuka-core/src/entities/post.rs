//! Post entity - content published by a user

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: EntityId,
    pub user_id: EntityId,
    pub community_id: Option<EntityId>,
    pub content: String,
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, not yet persisted Post
    pub fn new(user_id: EntityId, community_id: Option<EntityId>, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::UNASSIGNED,
            user_id,
            community_id,
            content,
            likes_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the post was published inside a community
    #[inline]
    pub fn is_community_post(&self) -> bool {
        self.community_id.is_some()
    }
}

//! Member entity - represents a user's membership in a community

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Community member entity (junction between User and Community)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMember {
    pub community_id: EntityId,
    pub user_id: EntityId,
    pub joined_at: DateTime<Utc>,
}

impl CommunityMember {
    /// Create a new CommunityMember joining now
    pub fn new(community_id: EntityId, user_id: EntityId) -> Self {
        Self {
            community_id,
            user_id,
            joined_at: Utc::now(),
        }
    }

    /// Check if this row is the membership of the given pair
    #[inline]
    pub fn is_pair(&self, community_id: EntityId, user_id: EntityId) -> bool {
        self.community_id == community_id && self.user_id == user_id
    }
}

//! Community entity - a named group users can join

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// Community entity
///
/// `members_count` is a denormalized cache of the number of
/// [`CommunityMember`](super::CommunityMember) rows for this community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub logo_picture: String,
    pub members_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    /// Create a new, not yet persisted Community with no members
    pub fn new(name: String, description: String, logo_picture: String) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::UNASSIGNED,
            name,
            description,
            logo_picture,
            members_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the store has assigned an identity
    #[inline]
    pub fn is_persisted(&self) -> bool {
        !self.id.is_zero()
    }

    /// Account for one newly inserted membership row
    pub fn record_new_member(&mut self) {
        self.members_count += 1;
        self.updated_at = Utc::now();
    }
}

//! User entity - an account on the platform

use chrono::{DateTime, Utc};

use crate::value_objects::EntityId;

/// User entity
///
/// The password hash lives only in storage and is never part of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted User
    pub fn new(username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::UNASSIGNED,
            username,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

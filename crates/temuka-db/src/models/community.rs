//! Community database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo_picture: String,
    pub members_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for community_members table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityMemberModel {
    pub community_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

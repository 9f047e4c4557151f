//! Entity to DTO mappers

use temuka_core::entities::{Community, Post, User};

use super::responses::{CommunityResponse, PostResponse, UserResponse};

impl From<&Community> for CommunityResponse {
    fn from(community: &Community) -> Self {
        Self {
            id: community.id,
            name: community.name.clone(),
            description: community.description.clone(),
            logo_picture: community.logo_picture.clone(),
            members_count: community.members_count,
            created_at: community.created_at,
            updated_at: community.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            community_id: post.community_id,
            content: post.content.clone(),
            likes_count: post.likes_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

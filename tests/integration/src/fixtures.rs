//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed response envelopes.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Success envelope with a payload
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

/// Success envelope without a payload
#[derive(Debug, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Create community request, using the wire names `desc` and `logopicture`
#[derive(Debug, Serialize)]
pub struct CreateCommunityRequest {
    pub name: String,
    pub desc: String,
    pub logopicture: String,
}

impl CreateCommunityRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("community{suffix}"),
            desc: format!("Community number {suffix}"),
            logopicture: format!("https://cdn.example.com/logo{suffix}.png"),
        }
    }
}

/// Join community request
#[derive(Debug, Serialize)]
pub struct JoinRequest {
    pub user_id: i64,
}

impl JoinRequest {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

/// Community response
#[derive(Debug, Deserialize)]
pub struct CommunityResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo_picture: String,
    pub members_count: i64,
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub user_id: i64,
    pub community_id: Option<i64>,
    pub content: String,
}

impl CreatePostRequest {
    pub fn new(user_id: i64, community_id: Option<i64>) -> Self {
        Self {
            user_id,
            community_id,
            content: format!("post body {}", unique_suffix()),
        }
    }
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub community_id: Option<i64>,
    pub content: String,
    pub likes_count: i64,
}

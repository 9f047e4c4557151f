//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; query strings only `Deserialize`.

use serde::Deserialize;
use temuka_core::EntityId;
use validator::Validate;

// ============================================================================
// Community Requests
// ============================================================================

/// Create community request
///
/// Field names on the wire are `name`, `desc` and `logopicture`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Community name must be 1-100 characters"))]
    pub name: String,

    #[serde(default, rename = "desc")]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,

    #[serde(default, rename = "logopicture")]
    #[validate(length(max = 2048, message = "Logo picture must be at most 2048 characters"))]
    pub logo_picture: String,
}

/// Join community request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct JoinCommunityRequest {
    pub user_id: EntityId,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Update user request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

/// Query string for `GET /users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersQuery {
    pub username: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    pub user_id: EntityId,

    #[serde(default)]
    pub community_id: Option<EntityId>,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

/// Query string for `GET /posts/timeline`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TimelineParams {
    pub limit: Option<i64>,
    pub before: Option<i64>,
}

impl TimelineParams {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Page size clamped to 1..=100
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_community_wire_names() {
        let req: CreateCommunityRequest = serde_json::from_value(json!({
            "name": "Rustaceans",
            "desc": "All things Rust",
            "logopicture": "https://example.com/logo.png"
        }))
        .unwrap();

        assert_eq!(req.description, "All things Rust");
        assert_eq!(req.logo_picture, "https://example.com/logo.png");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_community_defaults_and_limits() {
        let req: CreateCommunityRequest =
            serde_json::from_value(json!({ "name": "Solo" })).unwrap();
        assert!(req.description.is_empty());
        assert!(req.logo_picture.is_empty());

        let req: CreateCommunityRequest = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert!(req.validate().is_err());

        let req: CreateCommunityRequest =
            serde_json::from_value(json!({ "name": "x".repeat(101) })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_join_request_requires_numeric_user_id() {
        let req: JoinCommunityRequest = serde_json::from_value(json!({ "user_id": 7 })).unwrap();
        assert_eq!(req.user_id, EntityId::new(7));

        assert!(serde_json::from_value::<JoinCommunityRequest>(json!({ "user_id": "7" })).is_err());
        assert!(serde_json::from_value::<JoinCommunityRequest>(json!({})).is_err());
    }

    #[test]
    fn test_create_user_validation() {
        let req = CreateUserRequest {
            username: "a".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_update_user_partial() {
        let req: UpdateUserRequest =
            serde_json::from_value(json!({ "username": "newname" })).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_timeline_limit_clamped() {
        assert_eq!(TimelineParams::default().effective_limit(), 50);
        let params = TimelineParams {
            limit: Some(500),
            before: None,
        };
        assert_eq!(params.effective_limit(), 100);
        let params = TimelineParams {
            limit: Some(0),
            before: None,
        };
        assert_eq!(params.effective_limit(), 1);
    }
}

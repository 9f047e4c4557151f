//! Route definitions
//!
//! All API routes organized by domain. There is no version prefix.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{communities, health, posts, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(community_routes())
        .merge(user_routes())
        .merge(post_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Community routes
fn community_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/communities",
            get(communities::list_communities).post(communities::create_community),
        )
        .route("/communities/:community_id", get(communities::get_community))
        .route(
            "/communities/:community_id/join",
            post(communities::join_community).put(communities::join_community),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::search_users).post(users::create_user))
        .route("/users/:user_id", get(users::get_user).put(users::update_user))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts/timeline", get(posts::timeline))
        .route("/posts/like/:id", put(posts::like_post))
        .route("/posts/:id", delete(posts::delete_post))
}

//! Business logic services
//!
//! Services borrow a [`ServiceContext`] and orchestrate repository calls.

pub mod community;
pub mod context;
pub mod error;
pub mod health;
pub mod post;
pub mod user;

pub use community::CommunityService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use post::PostService;
pub use user::UserService;

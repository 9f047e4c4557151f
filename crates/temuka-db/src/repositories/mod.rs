//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in temuka-core.

mod community;
mod error;
mod health;
mod post;
mod user;

pub use community::{PgCommunityRepository, PgCommunityTransaction};
pub use health::PgHealthCheck;
pub use post::PgPostRepository;
pub use user::PgUserRepository;

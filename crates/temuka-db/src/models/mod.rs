//! Database models - SQLx-compatible structs for PostgreSQL tables

mod community;
mod post;
mod user;

pub use community::{CommunityMemberModel, CommunityModel};
pub use post::PostModel;
pub use user::UserModel;

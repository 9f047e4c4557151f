//! Domain entities - core business objects

mod community;
mod member;
mod post;
mod user;

pub use community::Community;
pub use member::CommunityMember;
pub use post::Post;
pub use user::User;

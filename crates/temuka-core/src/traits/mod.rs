//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommunityRepository, CommunityTransaction, HealthCheck, PostRepository, RepoResult,
    TimelineQuery, UserRepository,
};

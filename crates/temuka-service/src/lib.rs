//! # temuka-service
//!
//! Application layer: the community join workflow, user and post use cases,
//! request/response DTOs, and the dependency container handed to handlers.

pub mod dto;
pub mod services;

pub use services::{
    CommunityService, HealthService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};

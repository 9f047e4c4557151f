//! # temuka-db
//!
//! Persistence layer implementing the `temuka-core` repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - [`memory::MemoryStore`], an in-process store with the same contracts
//!
//! ## Usage
//!
//! ```rust,ignore
//! use temuka_db::pool::{create_pool, PoolSettings};
//! use temuka_db::repositories::PgCommunityRepository;
//!
//! async fn example(config: &temuka_common::DatabaseConfig) -> Result<(), sqlx::Error> {
//!     let pool = create_pool(&PoolSettings::from(config)).await?;
//!     let communities = PgCommunityRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{FailPoint, MemoryStore};
pub use pool::{create_pool, run_migrations, PgPool, PoolSettings};
pub use repositories::{
    PgCommunityRepository, PgHealthCheck, PgPostRepository, PgUserRepository,
};

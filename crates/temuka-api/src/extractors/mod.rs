//! Axum extractors for request handling
//!
//! Custom extractors for JSON bodies, validation, ID paths, user search, and timeline paging.

mod json;
mod pagination;
mod path;
mod search;
mod validated;

pub use json::JsonBody;
pub use pagination::Timeline;
pub use path::parse_id;
pub use search::UserSearch;
pub use validated::ValidatedJson;

//! Path parameter parsing
//!
//! Handlers take raw `Path<String>` segments and parse them here so each
//! route can report its own message ("Invalid community id", ...).

use temuka_core::EntityId;

use crate::response::ApiError;

/// Parse a decimal ID path segment
pub fn parse_id(raw: &str, invalid_message: &'static str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|_| ApiError::invalid_path(invalid_message))
}

//! Service layer error types
//!
//! The message carried by each variant is the text shown to API clients.
//! Internal errors keep the underlying cause for logging only.

use std::fmt;

use temuka_common::AppError;
use temuka_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Bad input
    Validation(String),

    /// Resource not found
    NotFound(String),

    /// Duplicate resource
    Conflict(String),

    /// Store or infrastructure failure
    Internal {
        message: String,
        source: Option<DomainError>,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => {
                write!(f, "{msg}")
            }
            Self::Internal { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Internal {
                source: Some(e), ..
            } => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error wrapping a store failure
    pub fn internal(msg: impl Into<String>, source: DomainError) -> Self {
        Self::Internal {
            message: msg.into(),
            source: Some(source),
        }
    }

    /// Returns a closure mapping any store failure to an internal error with `msg`
    pub fn storage(msg: &'static str) -> impl FnOnce(DomainError) -> Self {
        move |e| Self::internal(msg, e)
    }

    /// Get the HTTP status code for this error
    ///
    /// Conflicts are reported as 400.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Conflict(_) => 400,
            Self::NotFound(_) => 404,
            Self::Internal { .. } => 500,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal {
                source: Some(e), ..
            } => e.code(),
            Self::Internal { source: None, .. } => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::Conflict(msg) => msg,
            Self::Internal { message, .. } => message,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else if err.is_conflict() {
            Self::Conflict(err.to_string())
        } else if err.is_validation() {
            Self::Validation(err.to_string())
        } else {
            Self::internal("Internal server error", err)
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::NotFound(msg) => AppError::NotFound(msg),
            ServiceError::Conflict(msg) => AppError::Conflict(msg),
            ServiceError::Internal {
                source: Some(e), ..
            } => AppError::Domain(e),
            ServiceError::Internal {
                message,
                source: None,
            } => AppError::Internal(anyhow::anyhow!(message)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

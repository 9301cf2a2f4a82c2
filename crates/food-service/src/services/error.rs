//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use food_common::AppError;
use food_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation (unknown post, not the owner, ...)
    Domain(DomainError),

    /// Application error (auth, config, ...)
    App(AppError),

    /// The store could not be read
    ReadFailure(DomainError),

    /// The store rejected a write; nothing was changed locally
    WriteFailure(DomainError),

    /// Validation error
    Validation(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::ReadFailure(e) => write!(f, "Failed to fetch post: {e}"),
            Self::WriteFailure(e) => write!(f, "Failed to update post: {e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) | Self::ReadFailure(e) | Self::WriteFailure(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Classify a repository error raised while reading.
    ///
    /// Domain rule errors pass through unchanged.
    pub fn read_failure(err: DomainError) -> Self {
        if err.is_store_failure() {
            Self::ReadFailure(err)
        } else {
            Self::Domain(err)
        }
    }

    /// Classify a repository error raised while writing
    pub fn write_failure(err: DomainError) -> Self {
        if err.is_store_failure() {
            Self::WriteFailure(err)
        } else {
            Self::Domain(err)
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Check if this is the unknown-post error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_not_found())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authentication() {
                    401
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_store_failure() {
                    503
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::ReadFailure(_) | Self::WriteFailure(_) => 503,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::ReadFailure(_) => "STORE_READ_FAILED",
            Self::WriteFailure(_) => "STORE_WRITE_FAILED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) | ServiceError::ReadFailure(e) | ServiceError::WriteFailure(e) => {
                AppError::Domain(e)
            }
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

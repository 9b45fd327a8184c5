//! Unified error handling for the sailpma core.
//!
//! A single root type wraps domain and application errors so the CLI has
//! one seam to map onto user messages and exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum SailPmaError {
    /// Structural precondition on a target file failed.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration or file access failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SailPmaError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Target file fails a structural precondition.
    Validation,
    /// A required file (target or backup) does not exist.
    NotFound,
    /// A derived path or configured location is unusable.
    Configuration,
    /// Internal/system error.
    Internal,
}

/// Convenient result type alias.
pub type SailPmaResult<T> = Result<T, SailPmaError>;

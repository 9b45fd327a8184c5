//! Domain-layer errors: structural preconditions on the patched files.

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The structural anchor line is absent from the target file.
    ///
    /// The original tooling this replaces silently computed an invalid
    /// insertion index in this case and corrupted the output; here the
    /// action aborts before anything is written.
    #[error("anchor line '{anchor}' not found in target file")]
    AnchorNotFound { anchor: String },

    /// The anchor is the first line of the file, leaving no preceding line
    /// to splice the new block onto.
    #[error("anchor line '{anchor}' is the first line of the file; nothing precedes it")]
    AnchorAtFileStart { anchor: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AnchorNotFound { anchor } => vec![
                format!("The target file has no '{anchor}' line"),
                "Check that the file is a standard Laravel Sail layout".into(),
                "No changes were made".into(),
            ],
            Self::AnchorAtFileStart { anchor } => vec![
                format!("'{anchor}' appears as the very first line"),
                "The file does not look like a standard Laravel Sail layout".into(),
                "No changes were made".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AnchorNotFound { .. } | Self::AnchorAtFileStart { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

/// Domain error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Target file fails a structural precondition.
    Validation,
    /// Unexpected internal failure.
    Internal,
}

//! Application layer errors.
//!
//! These errors represent failures in orchestration and file access, not
//! structural problems with the files themselves — those are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a patch, backup, or restore.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A target file does not exist.
    #[error("file not found: {path}")]
    FileMissing { path: PathBuf },

    /// A filesystem operation on an existing path failed.
    #[error("failed to {operation} {path}: {reason}")]
    FileAccess {
        path: PathBuf,
        operation: &'static str,
        reason: String,
    },

    /// `--restore` was requested but no backup file exists for the target.
    #[error("no backup found at {path}")]
    BackupUnavailable { path: PathBuf },

    /// The stubs directory could not be derived from the services-trait
    /// path (the path is too shallow to walk four levels up).
    #[error("cannot derive the stubs directory from {path}")]
    StubPathUnresolvable { path: PathBuf },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileMissing { path } => vec![
                format!("'{}' does not exist", path.display()),
                "Run sailpma from the root of your Laravel project".into(),
                "Override the path with --compose-file / --services-file".into(),
            ],
            Self::FileAccess { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::BackupUnavailable { path } => vec![
                format!("Expected a backup at '{}'", path.display()),
                "Run an inject or add first; restore undoes the most recent one".into(),
                "The target file was not modified".into(),
            ],
            Self::StubPathUnresolvable { path } => vec![
                format!("'{}' is too shallow to locate Sail's stubs directory", path.display()),
                "The services file is expected under vendor/laravel/sail/src/Console/Concerns".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileMissing { .. } => ErrorCategory::NotFound,
            Self::FileAccess { .. } => ErrorCategory::Internal,
            Self::BackupUnavailable { .. } => ErrorCategory::NotFound,
            Self::StubPathUnresolvable { .. } => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_backup_is_not_found() {
        let err = ApplicationError::BackupUnavailable {
            path: PathBuf::from("docker-compose.backup"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("not modified")));
    }

    #[test]
    fn file_access_reports_operation_and_path() {
        let err = ApplicationError::FileAccess {
            path: PathBuf::from("docker-compose.yml"),
            operation: "write",
            reason: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("write"));
        assert!(msg.contains("docker-compose.yml"));
    }
}

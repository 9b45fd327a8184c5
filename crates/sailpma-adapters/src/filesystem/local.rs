//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use sailpma_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SailPmaError, SailPmaResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Every call opens and closes its own handle; nothing is cached or held
/// across operations.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> SailPmaResult<String> {
        trace!(path = %path.display(), "read");
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SailPmaResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write"))
    }

    fn copy(&self, from: &Path, to: &Path) -> SailPmaResult<()> {
        trace!(from = %from.display(), to = %to.display(), "copy");
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy"))
    }

    fn remove_file(&self, path: &Path) -> SailPmaResult<()> {
        trace!(path = %path.display(), "remove");
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> SailPmaError {
    let err = if e.kind() == io::ErrorKind::NotFound {
        ApplicationError::FileMissing {
            path: path.to_path_buf(),
        }
    } else {
        ApplicationError::FileAccess {
            path: path.to_path_buf(),
            operation,
            reason: e.to_string(),
        }
    };
    err.into()
}

// ── tests ─────────────────────────────────────────────────────────────────────

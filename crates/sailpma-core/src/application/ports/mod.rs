//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `sailpma-adapters` crate provides the implementations.

use std::path::Path;

use crate::error::SailPmaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sailpma_adapters::filesystem::LocalFilesystem` (production)
/// - `sailpma_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every operation is a blocking call; handles are opened and closed per
/// call, nothing is retained across operations. Implementations map a
/// missing path to `ApplicationError::FileMissing` and any other failure to
/// `ApplicationError::FileAccess`.
pub trait Filesystem: Send + Sync {
    /// Read an entire file into a string.
    fn read_to_string(&self, path: &Path) -> SailPmaResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SailPmaResult<()>;

    /// Copy a file, overwriting the destination if it exists.
    fn copy(&self, from: &Path, to: &Path) -> SailPmaResult<()>;

    /// Delete a file. Fails if the file does not exist.
    fn remove_file(&self, path: &Path) -> SailPmaResult<()>;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> bool;
}

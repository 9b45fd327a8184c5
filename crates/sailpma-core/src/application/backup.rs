//! Copy-based backup of the patched files.
//!
//! One backup slot per target: for `docker-compose.yml` the slot is the
//! sibling `docker-compose.backup`, and a new backup overwrites the old
//! one. A backup is taken immediately before mutation and consumed by
//! `--restore`; there is no versioning and no automatic cleanup.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::SailPmaResult,
};

/// Sibling backup path for a target: the extension is replaced with
/// `backup` (`docker-compose.yml` → `docker-compose.backup`).
pub fn backup_path(target: &Path) -> PathBuf {
    target.with_extension("backup")
}

/// Manages the single backup slot for each target file.
pub struct BackupManager<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> BackupManager<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Copy `target` into its backup slot.
    ///
    /// A failed copy is logged as a warning but does not abort the patch:
    /// the mutation proceeds without a recovery point, which the operator
    /// is told about.
    pub fn backup(&self, target: &Path) {
        let slot = backup_path(target);
        match self.fs.copy(target, &slot) {
            Ok(()) => debug!(backup = %slot.display(), "backup written"),
            Err(e) => warn!(
                target = %target.display(),
                "could not write backup, restore will be unavailable: {e}"
            ),
        }
    }

    /// Copy the backup slot back onto `target`.
    ///
    /// Fails with [`ApplicationError::BackupUnavailable`] when no backup
    /// exists; the target is left untouched in that case.
    pub fn restore(&self, target: &Path) -> SailPmaResult<()> {
        let slot = backup_path(target);
        if !self.fs.exists(&slot) {
            return Err(ApplicationError::BackupUnavailable { path: slot }.into());
        }
        self.fs.copy(&slot, target)?;
        debug!(target = %target.display(), "restored from backup");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

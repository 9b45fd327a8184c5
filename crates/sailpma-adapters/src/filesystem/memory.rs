//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use sailpma_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SailPmaResult,
};

/// In-memory filesystem for testing.
///
/// Cloning is cheap and clones share the same backing store, so a test can
/// hand one clone to a `PatchService` and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn seed(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .write()
            .expect("memory fs lock poisoned")
            .insert(path.into(), content.into());
    }

    /// Read a file's content without going through the port (testing helper).
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files
            .read()
            .expect("memory fs lock poisoned")
            .get(path)
            .cloned()
    }

    /// List all stored paths.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .expect("memory fs lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> SailPmaResult<String> {
        self.content(path).ok_or_else(|| {
            ApplicationError::FileMissing {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> SailPmaResult<()> {
        self.seed(path, content);
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> SailPmaResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn remove_file(&self, path: &Path) -> SailPmaResult<()> {
        self.files
            .write()
            .expect("memory fs lock poisoned")
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| {
                ApplicationError::FileMissing {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .expect("memory fs lock poisoned")
            .contains_key(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_store() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();
        clone.seed("a.yml", "services:");
        assert_eq!(fs.content(Path::new("a.yml")).unwrap(), "services:");
    }

    #[test]
    fn remove_then_read_fails() {
        let fs = MemoryFilesystem::new();
        fs.seed("stub", "x");
        fs.remove_file(Path::new("stub")).unwrap();
        assert!(fs.read_to_string(Path::new("stub")).is_err());
        assert!(!fs.exists(Path::new("stub")));
    }
}

//! Patch service - main application orchestrator.
//!
//! Coordinates the two mutually exclusive patch actions and their undo:
//! 1. `inject` - splice the indented service block into docker-compose.yml
//! 2. `add`    - register the service name in Sail's services trait and
//!    publish the template as a stub fragment
//! 3. `restore` - copy the backup back over whichever file was patched
//!
//! Every action is a sequence of blocking filesystem calls with no locking;
//! the tool assumes exclusive, single-invocation access to the targets. If
//! a write fails after the backup was taken, the backup stays in place for
//! a later `--restore`.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        backup::BackupManager,
        ports::Filesystem,
    },
    domain::{LineSequence, ServiceTemplate, locator, template},
    error::SailPmaResult,
};

/// How many parent directories separate the services trait from the Sail
/// package root (`src/Console/Concerns/<file>` → package root).
const STUB_ANCESTOR_DEPTH: usize = 4;

/// Which file a restore rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreTarget {
    /// docker-compose.yml was restored (undoing an `inject`).
    Compose,
    /// The Sail services trait was restored and the stub removed
    /// (undoing an `add`).
    ServiceList,
}

/// Main patch service.
///
/// Owns the filesystem port; all domain logic lives in `crate::domain`.
pub struct PatchService {
    fs: Box<dyn Filesystem>,
}

impl PatchService {
    /// Create a patch service with the given filesystem adapter.
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Inject the indented service block into `compose_file`, immediately
    /// before the top-level `networks:` line.
    ///
    /// Not idempotent: a second inject duplicates the block. The original
    /// file is copied to its backup slot before the mutated content is
    /// written back.
    #[instrument(skip_all, fields(file = %compose_file.display()))]
    pub fn inject(&self, compose_file: &Path, service: &ServiceTemplate) -> SailPmaResult<()> {
        let text = self.fs.read_to_string(compose_file)?;
        let mut lines = LineSequence::from_text(&text);

        let anchor = locator::find_compose_anchor(&lines)?;
        let target = locator::splice_target(anchor, locator::COMPOSE_ANCHOR)?;
        lines.append_to(target, &service.render_indented());

        BackupManager::new(&*self.fs).backup(compose_file);
        self.fs.write_file(compose_file, &lines.to_text())?;

        info!("phpmyadmin service injected");
        Ok(())
    }

    /// Register `'phpmyadmin',` in the `$services` array of
    /// `services_file` and publish the unindented template as a stub
    /// fragment under the Sail package's `stubs` directory.
    #[instrument(skip_all, fields(file = %services_file.display()))]
    pub fn add(&self, services_file: &Path, service: &ServiceTemplate) -> SailPmaResult<()> {
        let text = self.fs.read_to_string(services_file)?;
        let mut lines = LineSequence::from_text(&text);

        let anchor = locator::find_service_list_anchor(&lines)?;
        let target = locator::splice_target(anchor, locator::SERVICE_LIST_ANCHOR)?;
        lines.append_to(target, template::SERVICE_LIST_ENTRY);

        BackupManager::new(&*self.fs).backup(services_file);
        self.fs.write_file(services_file, &lines.to_text())?;

        let stub = stub_path(services_file)?;
        self.fs.write_file(&stub, &service.render())?;

        info!(stub = %stub.display(), "phpmyadmin registered and stub published");
        Ok(())
    }

    /// Undo the most recent `inject` or `add`.
    ///
    /// The injected marker line in the compose file decides which action is
    /// being undone: if present, the compose file is restored; otherwise
    /// the services trait is restored and the published stub deleted.
    #[instrument(skip_all)]
    pub fn restore(
        &self,
        compose_file: &Path,
        services_file: &Path,
    ) -> SailPmaResult<RestoreTarget> {
        let text = self.fs.read_to_string(compose_file)?;
        let lines = LineSequence::from_text(&text);
        let backups = BackupManager::new(&*self.fs);

        if lines.contains_line(template::INJECTED_MARKER) {
            backups.restore(compose_file)?;
            info!("docker-compose.yml restored");
            Ok(RestoreTarget::Compose)
        } else {
            backups.restore(services_file)?;
            self.fs.remove_file(&stub_path(services_file)?)?;
            info!("services trait restored, stub removed");
            Ok(RestoreTarget::ServiceList)
        }
    }
}

/// Path of the published stub fragment: `<sail package root>/stubs/phpmyadmin.stub`,
/// where the package root sits a fixed number of directories above the
/// services trait.
fn stub_path(services_file: &Path) -> Result<PathBuf, ApplicationError> {
    services_file
        .ancestors()
        .nth(STUB_ANCESTOR_DEPTH)
        .map(|root| root.join("stubs").join(template::STUB_FILE_NAME))
        .ok_or_else(|| ApplicationError::StubPathUnresolvable {
            path: services_file.to_path_buf(),
        })
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! The `--restore` action: undo the most recent inject/add.

use tracing::{info, instrument};

use sailpma_core::application::RestoreTarget;

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Copy the backup back over whichever file was patched.
///
/// The injected marker line in the compose file decides which target is
/// rolled back; undoing an `add` also deletes the published stub.
#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let compose = &config.paths.compose_file;
    let services_file = &config.paths.services_file;

    info!("restoring from backup");

    let target = super::patch_service().restore(compose, services_file)?;

    match target {
        RestoreTarget::Compose => {
            output.success(&format!("{} restored from backup", compose.display()))?;
        }
        RestoreTarget::ServiceList => {
            output.success(&format!(
                "{} restored from backup, published stub removed",
                services_file.display(),
            ))?;
        }
    }

    Ok(())
}

//! The default action: inject the service block into docker-compose.yml.

use tracing::{info, instrument};

use sailpma_core::domain::ServiceTemplate;

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Splice the indented phpMyAdmin block into the compose file, immediately
/// before the top-level `networks:` line.
///
/// Not idempotent: running it twice duplicates the block. The pre-inject
/// content stays in the sibling backup file for `--restore`.
#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let compose = &config.paths.compose_file;
    let template = ServiceTemplate::new(&config.service.version, &config.service.port);

    info!(
        file = %compose.display(),
        version = %config.service.version,
        port = %config.service.port,
        "injecting phpmyadmin service"
    );

    super::patch_service().inject(compose, &template)?;

    output.success(&format!(
        "phpMyAdmin {} injected into {} (port {})",
        config.service.version,
        compose.display(),
        config.service.port,
    ))?;
    output.print("Run `sail up -d` to start it; `sailpma --restore` undoes the change.")?;

    Ok(())
}

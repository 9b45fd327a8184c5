//! The `--add` action: register phpMyAdmin with Sail itself.

use tracing::{info, instrument};

use sailpma_core::domain::ServiceTemplate;

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Add `'phpmyadmin'` to the `$services` array of Sail's services trait and
/// publish the unindented template as a stub fragment in the Sail package's
/// `stubs` directory, where `sail add` picks it up.
#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let services_file = &config.paths.services_file;
    let template = ServiceTemplate::new(&config.service.version, &config.service.port);

    info!(file = %services_file.display(), "registering phpmyadmin with sail");

    super::patch_service().add(services_file, &template)?;

    output.success(&format!(
        "phpmyadmin added to Sail's service list in {}",
        services_file.display(),
    ))?;
    output.print("Stub published; run `sail add` to select phpmyadmin.")?;

    Ok(())
}

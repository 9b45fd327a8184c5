//! The phpMyAdmin service definition template.
//!
//! A fixed fragment with exactly two substitution points: the image tag and
//! the host port. Values flow into the output unescaped and unvalidated —
//! they are opaque strings all the way from the CLI to the written file
//! (documented limitation, matching the tool's patch-not-parse philosophy).

/// Default phpMyAdmin image tag.
pub const DEFAULT_VERSION: &str = "5.2.1";

/// Default host port mapped onto the container's port 80.
pub const DEFAULT_PORT: &str = "8080";

/// The literal line present in docker-compose.yml once the service block has
/// been injected. Restore uses this to decide which target file to roll back.
pub const INJECTED_MARKER: &str = "    phpmyadmin:";

/// Entry spliced into the `$services` array of the Sail services trait.
/// The trait file is tab-indented, so the entry is too.
pub const SERVICE_LIST_ENTRY: &str = "\t\t'phpmyadmin',";

/// File name of the published stub fragment.
pub const STUB_FILE_NAME: &str = "phpmyadmin.stub";

/// YAML requires spaces; tabs are rejected by the format.
const INDENT_UNIT: &str = "    ";

const SERVICE_TEMPLATE: &str = r#"phpmyadmin:
    image: 'phpmyadmin:{version}'
    ports:
        - "{port}:80"
    environment:
        PMA_HOST: mysql
    networks:
        - sail
    depends_on:
        - mysql"#;

/// A rendered-on-demand phpMyAdmin service definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTemplate {
    version: String,
    port: String,
}

impl ServiceTemplate {
    /// Build a template for the given image tag and host port.
    pub fn new(version: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            port: port.into(),
        }
    }

    /// Render the unindented service block — the form published as a stub
    /// fragment. No trailing newline.
    pub fn render(&self) -> String {
        SERVICE_TEMPLATE
            .replace("{version}", &self.version)
            .replace("{port}", &self.port)
    }

    /// Render the block with every line prefixed by one indent unit, ready
    /// for nesting under the `services:` mapping.
    pub fn render_indented(&self) -> String {
        indent_block(&self.render())
    }
}

impl Default for ServiceTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION, DEFAULT_PORT)
    }
}

/// Prefix every line of `block` with a single 4-space indent unit.
fn indent_block(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("{INDENT_UNIT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── tests ─────────────────────────────────────────────────────────────────────

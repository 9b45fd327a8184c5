//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults. No business logic lives here.
//!
//! The tool has no subcommands — the surface is flags only, and a bare
//! `sailpma` performs the default inject action. `--restore` takes
//! precedence over `--add`; precedence is resolved in `main`, not here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
///
/// clap's built-in `--version` flag is disabled: that name belongs to the
/// phpMyAdmin image tag, matching the tool this replaces.
#[derive(Debug, Parser)]
#[command(
    name = "sailpma",
    bin_name = "sailpma",
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Install phpMyAdmin into a Laravel Sail project",
    long_about = "sailpma patches your project's docker-compose.yml (or Sail's \
                  services trait) to add a phpMyAdmin web service. A backup of \
                  the patched file is kept next to it; --restore undoes the \
                  most recent change.",
    after_help = "EXAMPLES:\n\
        \x20 sailpma                               # inject with defaults\n\
        \x20 sailpma --version=5.2.2 --port=9090   # custom image tag and port\n\
        \x20 sailpma --add                         # register with Sail + publish stub\n\
        \x20 sailpma --restore                     # undo the last inject/add",
    disable_version_flag = true,
)]
pub struct Cli {
    /// phpMyAdmin image tag to install.
    ///
    /// Passed through as an opaque string into `image: 'phpmyadmin:<TAG>'`.
    #[arg(long = "version", value_name = "TAG", help = "phpMyAdmin image tag (default 5.2.1)")]
    pub version: Option<String>,

    /// Host port mapped onto the container's port 80.
    #[arg(long = "port", value_name = "PORT", help = "Host port for phpMyAdmin (default 8080)")]
    pub port: Option<String>,

    /// Register the service with Sail instead of patching docker-compose.yml
    /// directly: adds `'phpmyadmin'` to the services trait and publishes the
    /// template as a stub fragment.
    #[arg(long = "add", help = "Add to Sail's service list and publish a stub")]
    pub add: bool,

    /// Undo the most recent inject/add using the backup file, then exit.
    /// Takes precedence over --add.
    #[arg(long = "restore", help = "Restore the patched file from its backup")]
    pub restore: bool,

    /// Override the docker-compose.yml location.
    #[arg(
        long = "compose-file",
        value_name = "FILE",
        help = "Path to docker-compose.yml (default ./docker-compose.yml)"
    )]
    pub compose_file: Option<PathBuf>,

    /// Override the Sail services-trait location.
    #[arg(
        long = "services-file",
        value_name = "FILE",
        help = "Path to Sail's services trait (default under ./vendor/laravel/sail)"
    )]
    pub services_file: Option<PathBuf>,

    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        // clap's internal consistency check — catches conflicts, missing values, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_parses() {
        let cli = Cli::parse_from(["sailpma"]);
        assert!(!cli.add);
        assert!(!cli.restore);
        assert!(cli.version.is_none());
        assert!(cli.port.is_none());
    }

    #[test]
    fn version_flag_is_the_image_tag() {
        let cli = Cli::parse_from(["sailpma", "--version=5.2.2", "--port=9090"]);
        assert_eq!(cli.version.as_deref(), Some("5.2.2"));
        assert_eq!(cli.port.as_deref(), Some("9090"));
    }

    #[test]
    fn add_and_restore_may_both_be_present() {
        // --restore wins at dispatch time; parsing accepts both.
        let cli = Cli::parse_from(["sailpma", "--add", "--restore"]);
        assert!(cli.add);
        assert!(cli.restore);
    }

    #[test]
    fn path_overrides_parse() {
        let cli = Cli::parse_from(["sailpma", "--compose-file", "/tmp/dc.yml"]);
        assert_eq!(cli.compose_file.as_deref(), Some(std::path::Path::new("/tmp/dc.yml")));
    }

    #[test]
    fn no_color_flag_parses() {
        let cli = Cli::parse_from(["sailpma", "--no-color"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["sailpma", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it. This replaces the
//! global constants of the tool this reimplements — no ambient lookup.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied via [`AppConfig::apply_cli`])
//! 2. Config file (TOML, `--config` or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use sailpma_core::domain::{DEFAULT_PORT, DEFAULT_VERSION};

use crate::cli::Cli;

/// Conventional docker-compose.yml location, relative to the project root.
const DEFAULT_COMPOSE_FILE: &str = "./docker-compose.yml";

/// Conventional location of Sail's services trait inside vendor/.
const DEFAULT_SERVICES_FILE: &str =
    "./vendor/laravel/sail/src/Console/Concerns/InteractsWithDockerComposeServices.php";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The rendered service's parameters.
    pub service: ServiceConfig,
    /// Locations of the patched files.
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// phpMyAdmin image tag.
    pub version: String,
    /// Host port mapped onto the container's port 80.
    pub port: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub compose_file: PathBuf,
    pub services_file: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.into(),
            port: DEFAULT_PORT.into(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            compose_file: PathBuf::from(DEFAULT_COMPOSE_FILE),
            services_file: PathBuf::from(DEFAULT_SERVICES_FILE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` file must exist and parse; the
    /// default location is used only when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Apply CLI flag overrides on top of the loaded configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(version) = &cli.version {
            self.service.version = version.clone();
        }
        if let Some(port) = &cli.port {
            self.service.port = port.clone();
        }
        if let Some(compose) = &cli.compose_file {
            self.paths.compose_file = compose.clone();
        }
        if let Some(services) = &cli.services_file {
            self.paths.services_file = services.clone();
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sailpma.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sailpma", "sailpma")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sailpma.toml"))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

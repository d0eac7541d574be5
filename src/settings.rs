use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::github::client::DEFAULT_API_BASE;
use crate::models::profile::SiteProfile;

/// Server configuration.
///
/// Layers, lowest precedence first: built-in defaults, an optional TOML file
/// (`folio.toml`, or the path in `FOLIO_CONFIG`), then `FOLIO_*` environment
/// variables with `__` separating nested keys
/// (e.g. `FOLIO_GITHUB__REPO_COUNT=9`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub profile: SiteProfile,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub api_base: String,
    /// How many repositories the showcase displays.
    pub repo_count: u8,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            repo_count: 6,
            timeout_secs: 10,
        }
    }
}

impl GithubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            name: "portfolio".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load the configuration from the default file location and `FOLIO_*`.
    pub fn load() -> Result<Self, AppError> {
        let path = std::env::var("FOLIO_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("folio.toml"));
        Self::build(Some(&path), "FOLIO")
    }

    fn build(file: Option<&Path>, env_prefix: &str) -> Result<Self, AppError> {
        let defaults = Config::try_from(&SiteConfig::default())
            .map_err(|e| AppError::Config(e.to_string()))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

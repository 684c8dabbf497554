//! Configuration types and parsing for dex.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names tried by [`Config::discover`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["dex.yml", "dex.yaml"];

/// Top-level configuration from dex.yml
///
/// Every section is optional; an absent file is equivalent to an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store location
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Remote data source used by `dex load`
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard listener used by `dex serve`
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Store location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the DuckDB file
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Remote data source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL; the entity id is appended as the final path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds; a timeout fails the band
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// URL of a single entity on the remote API
    pub fn entity_url(&self, id: u32) -> String {
        format!("{}/{id}", self.base_url.trim().trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Dashboard listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_db_path() -> String {
    "data/pokemon.duckdb".to_string()
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2/pokemon".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Config {
    /// Load configuration from an explicit file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn parse(content: &str) -> CoreResult<Self> {
        // An empty file deserializes to `()`, not an empty map.
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Look for dex.yml or dex.yaml in `dir`, falling back to defaults
    pub fn discover(dir: &Path) -> CoreResult<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                return Self::load(&path);
            }
        }
        log::debug!("No dex.yml in {}, using defaults", dir.display());
        Ok(Self::default())
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CoreError::ConfigInvalid {
                message: format!("api.base_url must be an http(s) URL, got '{base_url}'"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "api.timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.serve.host.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "serve.host cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

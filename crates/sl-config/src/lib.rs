//! # sl-config
//!
//! Layered configuration loading for Studylog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STUDYLOG_*` prefix, `__` as separator)
//! 2. Project-level `.studylog/config.toml` (or an explicit `--config` file)
//! 3. User-level `~/.config/studylog/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STUDYLOG_REST__URL` -> `rest.url`,
//! `STUDYLOG_BACKEND__KIND` -> `backend.kind`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use sl_config::SlConfig;
//!
//! let config = SlConfig::load().expect("config");
//! if config.rest.is_configured() {
//!     println!("REST URL: {}", config.rest.url);
//! }
//! ```

mod display;
mod error;
mod general;
mod libsql;
mod rest;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, ReconcileMode};
pub use libsql::LibsqlConfig;
pub use rest::RestConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".studylog/config.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "STUDYLOG_";

/// Which backend stores the study records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Libsql,
    Rest,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SlConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub libsql: LibsqlConfig,
    #[serde(default)]
    pub rest: RestConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SlConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling in.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(None).extract().map_err(ConfigError::from)
    }

    /// Load with an explicit config file standing in for the project-local one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if the file does not exist, or
    /// `ConfigError::Figment` as for [`Self::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Self::figment(Some(path)).extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// `local_override` replaces `.studylog/config.toml` when given.
    pub fn figment(local_override: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path =
            local_override.map_or_else(|| PathBuf::from(LOCAL_CONFIG_PATH), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check that the selected backend has what it needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the REST backend is selected
    /// without a URL and key, or `ConfigError::InvalidValue` when the libSQL
    /// backend has neither a path nor a remote URL.
    pub fn validate_backend(&self) -> Result<BackendKind, ConfigError> {
        match self.backend.kind {
            BackendKind::Rest if !self.rest.is_configured() => Err(ConfigError::NotConfigured {
                section: "rest".into(),
            }),
            BackendKind::Libsql if self.libsql.path.is_empty() && !self.libsql.is_remote() => {
                Err(ConfigError::InvalidValue {
                    field: "libsql.path".into(),
                    reason: "empty path and no remote url/auth_token".into(),
                })
            }
            kind => Ok(kind),
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("studylog").join("config.toml"))
    }
}

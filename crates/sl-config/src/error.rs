//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config layer could not be read or a value has the wrong type.
    #[error("studylog config could not be loaded: {0}")]
    Figment(#[from] figment::Error),

    /// The file passed with `--config` does not exist.
    #[error("config file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    /// The selected backend lacks the settings it needs.
    #[error("[{section}] is selected but not configured; set its url and key")]
    NotConfigured { section: String },

    /// A setting is present but unusable.
    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}

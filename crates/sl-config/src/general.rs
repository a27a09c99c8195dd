//! General application configuration.

use serde::{Deserialize, Serialize};
use sl_core::pagination::{DEFAULT_PAGE_SIZE, Paginator};

use crate::error::ConfigError;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// What the front end does with local state after a successful mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileMode {
    /// Re-fetch the whole collection.
    #[default]
    Reload,
    /// Patch the single affected record in place.
    Patch,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Records per page in list views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Reconciliation strategy after insert/update/delete.
    #[serde(default)]
    pub reconcile: ReconcileMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            reconcile: ReconcileMode::default(),
        }
    }
}

impl GeneralConfig {
    /// Build an empty paginator with the configured page size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `page_size` is zero.
    pub fn paginator(&self) -> Result<Paginator, ConfigError> {
        Paginator::new(self.page_size).map_err(|e| ConfigError::InvalidValue {
            field: "general.page_size".into(),
            reason: e.to_string(),
        })
    }
}

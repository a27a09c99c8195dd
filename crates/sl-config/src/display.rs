//! Timestamp display configuration.

use serde::{Deserialize, Serialize};
use sl_core::timefmt::{ClockMode, DEFAULT_OFFSET_HOURS, DisplayClock};

use crate::error::ConfigError;

const fn default_offset_hours() -> i32 {
    DEFAULT_OFFSET_HOURS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// `shift` (hour arithmetic, no day rollover) or `offset` (true fixed
    /// offset conversion).
    #[serde(default)]
    pub clock: ClockMode,

    /// Hours added to UTC when rendering timestamps.
    #[serde(default = "default_offset_hours")]
    pub offset_hours: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock: ClockMode::default(),
            offset_hours: default_offset_hours(),
        }
    }
}

impl DisplayConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `offset_hours` is out of range.
    pub fn clock(&self) -> Result<DisplayClock, ConfigError> {
        DisplayClock::new(self.clock, self.offset_hours).map_err(|e| ConfigError::InvalidValue {
            field: "display.offset_hours".into(),
            reason: e.to_string(),
        })
    }
}

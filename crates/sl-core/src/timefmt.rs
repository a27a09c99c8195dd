//! Display timestamp formatting.
//!
//! Backend timestamps are rendered as `YYYY/MM/DD HH:MM:SS ` (the trailing
//! space is part of the format). Two clock modes exist:
//!
//! - [`ClockMode::Shift`] adds the configured hour offset to the UTC hour
//!   and wraps it mod 24. Date fields are left alone, so a shift that crosses
//!   midnight does not roll the day over.
//! - [`ClockMode::Offset`] converts the instant into a fixed UTC offset, so
//!   day, month, and year roll over correctly.
//!
//! Unparseable input renders as [`INVALID_DATE`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Rendered in place of a timestamp that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Default display offset in hours (JST).
pub const DEFAULT_OFFSET_HOURS: i32 = 9;

/// How the display offset is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// Arithmetic hour shift, no day rollover.
    #[default]
    Shift,
    /// True fixed-offset conversion.
    Offset,
}

impl ClockMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Offset => "offset",
        }
    }
}

/// Formats backend timestamps for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayClock {
    mode: ClockMode,
    offset_hours: i32,
}

impl Default for DisplayClock {
    fn default() -> Self {
        Self {
            mode: ClockMode::Shift,
            offset_hours: DEFAULT_OFFSET_HOURS,
        }
    }
}

impl DisplayClock {
    /// Build a clock for `mode` with an offset of `offset_hours`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` unless `-23 <= offset_hours <= 23`.
    pub fn new(mode: ClockMode, offset_hours: i32) -> Result<Self, CoreError> {
        if !(-23..=23).contains(&offset_hours) {
            return Err(CoreError::InvalidValue {
                field: "offset_hours".into(),
                reason: format!("{offset_hours} is outside -23..=23"),
            });
        }
        Ok(Self { mode, offset_hours })
    }

    #[must_use]
    pub const fn mode(&self) -> ClockMode {
        self.mode
    }

    #[must_use]
    pub const fn offset_hours(&self) -> i32 {
        self.offset_hours
    }

    /// Render a raw backend timestamp for display.
    #[must_use]
    pub fn format(&self, raw: &str) -> String {
        let Some(utc) = parse_timestamp(raw) else {
            return INVALID_DATE.to_string();
        };

        match self.mode {
            ClockMode::Shift => {
                let hour = (i64::from(utc.hour()) + i64::from(self.offset_hours())).rem_euclid(24);
                format!(
                    "{:04}/{:02}/{:02} {:02}:{:02}:{:02} ",
                    utc.year(),
                    utc.month(),
                    utc.day(),
                    hour,
                    utc.minute(),
                    utc.second()
                )
            }
            ClockMode::Offset => utc
                .checked_add_signed(TimeDelta::hours(i64::from(self.offset_hours)))
                .map_or_else(
                    || INVALID_DATE.to_string(),
                    |local| local.format("%Y/%m/%d %H:%M:%S ").to_string(),
                ),
        }
    }
}

/// Parse the timestamp shapes the backends produce.
///
/// Accepts RFC 3339, Postgres-style `YYYY-MM-DD HH:MM:SS[.f]+HH[:MM]`, naive
/// date-times (read as UTC), and bare dates (midnight UTC).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

//! Row normalization: backend row → display record.

use crate::entities::{RawRecord, StudyRecord};
use crate::timefmt::DisplayClock;

/// Turn a backend row into a display record.
///
/// Only the timestamps change; no validation happens here.
#[must_use]
pub fn normalize(raw: &RawRecord, clock: &DisplayClock) -> StudyRecord {
    StudyRecord {
        id: raw.id.clone(),
        title: raw.title.clone(),
        duration_minutes: raw.duration_minutes,
        created_at: clock.format(&raw.created_at),
        updated_at: clock.format(&raw.updated_at),
    }
}

/// Format the timestamps of a record returned unformatted by an insert or
/// update, so it can sit next to listed records.
#[must_use]
pub fn normalize_record(record: StudyRecord, clock: &DisplayClock) -> StudyRecord {
    StudyRecord {
        created_at: clock.format(&record.created_at),
        updated_at: clock.format(&record.updated_at),
        ..record
    }
}

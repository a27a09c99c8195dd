//! Detail-view selection.

use sl_core::entities::StudyRecord;

/// The record shown in the detail view.
///
/// The view is open while an id is requested. A lookup miss still opens the
/// view, with nothing selected.
#[derive(Debug, Default)]
pub struct Selection {
    requested: Option<String>,
    selected: Option<StudyRecord>,
}

impl Selection {
    /// Select the first record with `id` and open the detail view.
    pub fn select(&mut self, id: &str, records: &[StudyRecord]) {
        self.selected = records.iter().find(|r| r.id == id).cloned();
        if self.selected.is_none() {
            tracing::error!(id, "no study record with this id in the current list");
        }
        self.requested = Some(id.to_string());
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&StudyRecord> {
        self.selected.as_ref()
    }

    /// Id the open detail view was asked for; `None` when the view is closed.
    #[must_use]
    pub fn requested(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn close(&mut self) {
        self.requested = None;
        self.selected = None;
    }
}

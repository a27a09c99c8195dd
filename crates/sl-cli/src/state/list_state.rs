//! The in-memory record collection and its loading flag.
//!
//! Every fetch takes a [`FetchTicket`]. Only the ticket from the most recent
//! fetch may replace the records; older completions are dropped.

use sl_core::backend::BackendError;
use sl_core::entities::StudyRecord;

/// Proof that a fetch was started, stamped with its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct FetchTicket {
    generation: u64,
}

/// What became of a finished fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The records were replaced.
    Applied,
    /// A newer fetch had started; the result was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct ListState {
    records: Vec<StudyRecord>,
    loading: bool,
    generation: u64,
}

impl ListState {
    #[must_use]
    pub fn records(&self) -> &[StudyRecord] {
        &self.records
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark the list as loading and hand out a ticket for this fetch.
    pub const fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Settle a fetch.
    ///
    /// A current ticket clears `loading`; success replaces the records and
    /// failure keeps the previous ones. A stale ticket changes nothing.
    ///
    /// # Errors
    ///
    /// Returns the fetch's error when the ticket is current.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<StudyRecord>, BackendError>,
    ) -> Result<FetchOutcome, BackendError> {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return Ok(FetchOutcome::Stale);
        }

        self.loading = false;
        self.records = result?;
        Ok(FetchOutcome::Applied)
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&mut self, record: StudyRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Drop the record with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}

//! Data-access layer over a [`RecordBackend`].
//!
//! `RecordService` is the only thing the front end talks to. It normalizes
//! listed rows for display and logs every backend failure. List, insert, and
//! update return the failure to the caller; delete swallows it after logging.

use crate::backend::{BackendError, RecordBackend};
use crate::entities::{NewRecord, StudyRecord};
use crate::normalize::normalize;
use crate::timefmt::DisplayClock;

pub struct RecordService<B> {
    backend: B,
    clock: DisplayClock,
}

impl<B: RecordBackend> RecordService<B> {
    #[must_use]
    pub const fn new(backend: B, clock: DisplayClock) -> Self {
        Self { backend, clock }
    }

    /// Access the underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn clock(&self) -> &DisplayClock {
        &self.clock
    }

    /// Fetch every record, normalized for display.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    pub async fn list_all(&self) -> Result<Vec<StudyRecord>, BackendError> {
        let rows = self.backend.list_rows().await.inspect_err(|error| {
            tracing::error!(%error, "failed to list study records");
        })?;
        tracing::debug!(count = rows.len(), "listed study records");
        Ok(rows.iter().map(|row| normalize(row, &self.clock)).collect())
    }

    /// Insert a record. The returned rows keep the backend's raw timestamps.
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    pub async fn insert(
        &self,
        title: &str,
        duration_minutes: i64,
    ) -> Result<Vec<StudyRecord>, BackendError> {
        let rows = self
            .backend
            .insert_row(&NewRecord::new(title, duration_minutes))
            .await
            .inspect_err(|error| {
                tracing::error!(%error, title, "failed to insert study record");
            })?;
        Ok(rows
            .into_iter()
            .map(StudyRecord::from_raw_unformatted)
            .collect())
    }

    /// Update title and duration of `id`. Same raw-timestamp caveat as
    /// [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns the backend's error unchanged.
    pub async fn update(
        &self,
        id: &str,
        title: &str,
        duration_minutes: i64,
    ) -> Result<Vec<StudyRecord>, BackendError> {
        let rows = self
            .backend
            .update_row(id, &NewRecord::new(title, duration_minutes))
            .await
            .inspect_err(|error| {
                tracing::error!(%error, id, "failed to update study record");
            })?;
        Ok(rows
            .into_iter()
            .map(StudyRecord::from_raw_unformatted)
            .collect())
    }

    /// Delete `id`. Failures are logged, never returned.
    ///
    /// The return value says whether the backend acknowledged the delete, so
    /// callers can decide how to reconcile local state.
    pub async fn remove(&self, id: &str) -> bool {
        match self.backend.delete_row(id).await {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(%error, id, "failed to delete study record");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::FakeBackend;
    use crate::timefmt::INVALID_DATE;

    fn service(backend: FakeBackend) -> RecordService<FakeBackend> {
        RecordService::new(backend, DisplayClock::default())
    }

    #[tokio::test]
    async fn list_all_normalizes_rows() {
        let svc = service(FakeBackend::with_rows(vec![
            FakeBackend::row("rec-1", "Borrowing", 30, "2024-05-01T01:00:00Z"),
            FakeBackend::row("rec-2", "Macros", 15, "broken"),
        ]));

        let records = svc.list_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].created_at, "2024/05/01 10:00:00 ");
        assert_eq!(records[1].updated_at, INVALID_DATE);
    }

    #[tokio::test]
    async fn list_all_on_empty_backend_is_empty() {
        let svc = service(FakeBackend::default());
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_surfaces_backend_message() {
        let svc = service(FakeBackend::failing("permission denied for table"));
        let err = svc.list_all().await.unwrap_err();
        assert_eq!(err.message(), "permission denied for table");
    }

    #[tokio::test]
    async fn insert_returns_unformatted_rows() {
        let svc = service(FakeBackend::default());
        let inserted = svc.insert("Async", 20).await.unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].title, "Async");
        assert_eq!(inserted[0].created_at, FakeBackend::NOW);
    }

    #[tokio::test]
    async fn insert_and_update_surface_errors() {
        let svc = service(FakeBackend::failing("duplicate key"));
        assert_eq!(
            svc.insert("x", 1).await.unwrap_err(),
            BackendError::service("duplicate key")
        );
        assert_eq!(
            svc.update("rec-1", "x", 1).await.unwrap_err(),
            BackendError::service("duplicate key")
        );
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let svc = service(FakeBackend::with_rows(vec![FakeBackend::row(
            "rec-1",
            "Old",
            10,
            "2024-05-01T01:00:00Z",
        )]));
        let updated = svc.update("rec-1", "New", 25).await.unwrap();
        assert_eq!(updated[0].id, "rec-1");
        assert_eq!(updated[0].title, "New");
        assert_eq!(updated[0].duration_minutes, 25);
    }

    #[tokio::test]
    async fn remove_swallows_errors() {
        let svc = service(FakeBackend::failing("network down"));
        assert!(!svc.remove("rec-1").await);
    }

    #[tokio::test]
    async fn remove_deletes_row() {
        let svc = service(FakeBackend::with_rows(vec![FakeBackend::row(
            "rec-1",
            "Gone",
            10,
            "2024-05-01T01:00:00Z",
        )]));
        assert!(svc.remove("rec-1").await);
        assert!(svc.list_all().await.unwrap().is_empty());
    }
}

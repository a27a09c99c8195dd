//! The view controller: owns list, selection, and pager state, runs
//! mutations through the record service, and reconciles afterwards.

use sl_config::ReconcileMode;
use sl_core::backend::{BackendError, RecordBackend};
use sl_core::entities::StudyRecord;
use sl_core::normalize::normalize_record;
use sl_core::pagination::{PageMarker, Paginator};
use sl_core::service::RecordService;
use sl_core::validation::{RecordDraft, ValidationErrors};
use thiserror::Error;

use crate::state::{FetchOutcome, ListState, Selection};

/// Why a create or edit form was not saved.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft failed validation; the backend was not called.
    #[error("{0}")]
    Invalid(ValidationErrors),

    /// The backend rejected the write.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub struct Controller<B> {
    service: RecordService<B>,
    list: ListState,
    selection: Selection,
    paginator: Paginator,
    reconcile: ReconcileMode,
}

impl<B: RecordBackend> Controller<B> {
    #[must_use]
    pub fn new(service: RecordService<B>, paginator: Paginator, reconcile: ReconcileMode) -> Self {
        Self {
            service,
            list: ListState::default(),
            selection: Selection::default(),
            paginator,
            reconcile,
        }
    }

    #[must_use]
    pub const fn service(&self) -> &RecordService<B> {
        &self.service
    }

    #[must_use]
    pub const fn list(&self) -> &ListState {
        &self.list
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Re-fetch the whole collection.
    ///
    /// # Errors
    ///
    /// Returns the backend's error; the previous records stay in place.
    pub async fn reload(&mut self) -> Result<FetchOutcome, BackendError> {
        let ticket = self.list.begin_fetch();
        let result = self.service.list_all().await;
        let outcome = self.list.finish(ticket, result)?;
        if outcome == FetchOutcome::Applied {
            self.sync_pager();
        }
        Ok(outcome)
    }

    /// Open the detail view for `id` from the records already loaded.
    pub fn show(&mut self, id: &str) {
        self.selection.select(id, self.list.records());
    }

    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    /// Validate and insert a new record, then reconcile.
    ///
    /// Returns the backend's representation of the inserted row(s), with
    /// timestamps as the backend sent them.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without calling the backend when the
    /// draft fails validation, or [`SubmitError::Backend`] when the insert
    /// fails.
    pub async fn create(&mut self, draft: &RecordDraft) -> Result<Vec<StudyRecord>, SubmitError> {
        let record = draft.validate().map_err(SubmitError::Invalid)?;
        let rows = self
            .service
            .insert(&record.title, record.duration_minutes)
            .await?;
        self.reconcile_rows(&rows).await;
        Ok(rows)
    }

    /// Validate and update the record with `id`, then reconcile.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create`].
    pub async fn update(
        &mut self,
        id: &str,
        draft: &RecordDraft,
    ) -> Result<Vec<StudyRecord>, SubmitError> {
        let record = draft.validate().map_err(SubmitError::Invalid)?;
        let rows = self
            .service
            .update(id, &record.title, record.duration_minutes)
            .await?;
        self.reconcile_rows(&rows).await;
        Ok(rows)
    }

    /// Delete `id`, then reconcile. Returns whether the backend acknowledged
    /// the delete; failures are logged by the service.
    pub async fn delete(&mut self, id: &str) -> bool {
        let acknowledged = self.service.remove(id).await;
        match self.reconcile {
            ReconcileMode::Reload => self.reload_after_mutation().await,
            ReconcileMode::Patch => {
                if acknowledged && self.list.remove(id) {
                    self.sync_pager();
                }
            }
        }
        acknowledged
    }

    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.paginator.prev_page()
    }

    /// Apply a typed page number; invalid or out-of-range input is ignored.
    pub fn jump(&mut self, input: &str) -> bool {
        self.paginator.jump(input)
    }

    /// Records on the current page.
    #[must_use]
    pub fn visible(&self) -> &[StudyRecord] {
        self.paginator.visible(self.list.records())
    }

    #[must_use]
    pub fn markers(&self) -> Vec<PageMarker> {
        self.paginator.markers()
    }

    async fn reconcile_rows(&mut self, rows: &[StudyRecord]) {
        match self.reconcile {
            ReconcileMode::Reload => self.reload_after_mutation().await,
            ReconcileMode::Patch => {
                for row in rows {
                    self.list
                        .upsert(normalize_record(row.clone(), self.service.clock()));
                }
                self.sync_pager();
            }
        }
    }

    async fn reload_after_mutation(&mut self) {
        if let Err(error) = self.reload().await {
            tracing::warn!(%error, "reload after mutation failed; list may be out of date");
        }
    }

    fn sync_pager(&mut self) {
        self.paginator.set_total_items(self.list.records().len());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sl_config::ReconcileMode;
    use sl_core::pagination::Paginator;
    use sl_core::service::RecordService;
    use sl_core::timefmt::DisplayClock;
    use sl_core::validation::{Field, RecordDraft, TITLE_REQUIRED};

    use super::*;
    use crate::test_support::{FakeBackend, raw};

    fn controller(backend: FakeBackend, reconcile: ReconcileMode) -> Controller<FakeBackend> {
        Controller::new(
            RecordService::new(backend, DisplayClock::default()),
            Paginator::default(),
            reconcile,
        )
    }

    fn seeded(count: usize) -> FakeBackend {
        FakeBackend::with_rows(
            (1..=count)
                .map(|i| raw(&format!("rec-{i}"), &format!("title {i}"), 10))
                .collect(),
        )
    }

    #[tokio::test]
    async fn reload_on_empty_backend() {
        let mut ctl = controller(FakeBackend::default(), ReconcileMode::Reload);
        assert_eq!(ctl.reload().await.unwrap(), FetchOutcome::Applied);
        assert!(ctl.list().records().is_empty());
        assert!(!ctl.list().is_loading());
        assert_eq!(ctl.paginator().total_pages(), 0);
        assert_eq!(ctl.paginator().current_page(), 1);
    }

    #[tokio::test]
    async fn reload_failure_keeps_records_and_surfaces_message() {
        let backend = seeded(2);
        let mut ctl = controller(backend, ReconcileMode::Reload);
        ctl.reload().await.unwrap();

        ctl.service().backend().fail_with("permission denied for table");
        let err = ctl.reload().await.unwrap_err();

        assert_eq!(err.message(), "permission denied for table");
        assert_eq!(ctl.list().records().len(), 2);
        assert!(!ctl.list().is_loading());
    }

    #[tokio::test]
    async fn pages_through_twelve_records() {
        let mut ctl = controller(seeded(12), ReconcileMode::Reload);
        ctl.reload().await.unwrap();

        assert_eq!(ctl.paginator().total_pages(), 3);
        assert_eq!(ctl.visible().len(), 5);
        assert!(ctl.next_page());
        assert!(ctl.next_page());
        assert_eq!(ctl.visible().len(), 2);
        assert!(!ctl.next_page());
        assert!(!ctl.jump("4"));
        assert!(!ctl.jump("0"));
        assert!(!ctl.jump("2.5"));
        assert!(ctl.jump(" 1 "));
        assert_eq!(ctl.visible()[0].id, "rec-1");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_backend() {
        let mut ctl = controller(FakeBackend::default(), ReconcileMode::Reload);

        let err = ctl.create(&RecordDraft::new("  ", "0")).await.unwrap_err();
        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.message_for(Field::Title), Some(TITLE_REQUIRED));
                assert!(errors.message_for(Field::Duration).is_some());
            }
            SubmitError::Backend(other) => panic!("unexpected backend error: {other}"),
        }
        assert_eq!(ctl.service().backend().write_calls(), 0);
    }

    #[tokio::test]
    async fn create_returns_raw_row_and_reload_formats_it() {
        let mut ctl = controller(FakeBackend::default(), ReconcileMode::Reload);

        let rows = ctl.create(&RecordDraft::new("Rust", "45")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].created_at, crate::test_support::NOW);

        let listed = &ctl.list().records()[0];
        assert_eq!(listed.id, rows[0].id);
        assert_eq!(listed.created_at, "2024/06/01 09:00:00 ");
    }

    #[tokio::test]
    async fn create_in_patch_mode_normalizes_returned_row() {
        let mut ctl = controller(FakeBackend::default(), ReconcileMode::Patch);

        ctl.create(&RecordDraft::new("Rust", "45")).await.unwrap();

        assert_eq!(ctl.service().backend().list_calls(), 0);
        assert_eq!(ctl.list().records().len(), 1);
        assert_eq!(ctl.list().records()[0].created_at, "2024/06/01 09:00:00 ");
        assert_eq!(ctl.paginator().total_items(), 1);
    }

    #[tokio::test]
    async fn update_is_visible_after_reload_under_same_id() {
        let mut ctl = controller(seeded(3), ReconcileMode::Reload);
        ctl.reload().await.unwrap();

        ctl.update("rec-2", &RecordDraft::new("Rust async", "90"))
            .await
            .unwrap();

        let updated = ctl
            .list()
            .records()
            .iter()
            .find(|r| r.id == "rec-2")
            .unwrap();
        assert_eq!(updated.title, "Rust async");
        assert_eq!(updated.duration_minutes, 90);
        assert_eq!(updated.updated_at, "2024/06/01 09:00:00 ");
    }

    #[tokio::test]
    async fn update_backend_failure_is_returned() {
        let mut ctl = controller(seeded(1), ReconcileMode::Reload);
        ctl.service().backend().fail_with("row is locked");

        let err = ctl
            .update("rec-1", &RecordDraft::new("x", "1"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "row is locked");
    }

    #[tokio::test]
    async fn delete_removes_entry_after_reload() {
        let mut ctl = controller(seeded(6), ReconcileMode::Reload);
        ctl.reload().await.unwrap();
        assert!(ctl.jump("2"));

        assert!(ctl.delete("rec-6").await);

        assert_eq!(ctl.list().records().len(), 5);
        assert!(ctl.list().records().iter().all(|r| r.id != "rec-6"));
        assert_eq!(ctl.paginator().current_page(), 1);
    }

    #[tokio::test]
    async fn delete_failure_is_swallowed() {
        let mut ctl = controller(seeded(2), ReconcileMode::Patch);
        ctl.reload().await.unwrap();
        ctl.service().backend().fail_with("network down");

        assert!(!ctl.delete("rec-1").await);
        assert_eq!(ctl.list().records().len(), 2);
    }

    #[tokio::test]
    async fn show_miss_opens_empty_detail() {
        let mut ctl = controller(seeded(1), ReconcileMode::Reload);
        ctl.reload().await.unwrap();

        ctl.show("rec-9");
        assert_eq!(ctl.selection().requested(), Some("rec-9"));
        assert!(ctl.selection().selected().is_none());

        ctl.show("rec-1");
        assert_eq!(ctl.selection().selected().unwrap().title, "title 1");
    }
}

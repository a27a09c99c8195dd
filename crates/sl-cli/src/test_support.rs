//! In-memory backend and record builders for CLI tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use sl_core::backend::{BackendError, RecordBackend};
use sl_core::entities::{NewRecord, RawRecord, StudyRecord};

pub const NOW: &str = "2024-06-01T00:00:00+00:00";

pub fn raw(id: &str, title: &str, minutes: i64) -> RawRecord {
    RawRecord {
        id: id.into(),
        title: title.into(),
        duration_minutes: minutes,
        created_at: NOW.into(),
        updated_at: NOW.into(),
    }
}

pub fn record(id: &str) -> StudyRecord {
    StudyRecord {
        id: id.into(),
        title: format!("title {id}"),
        duration_minutes: 30,
        created_at: "2024/06/01 09:00:00 ".into(),
        updated_at: "2024/06/01 09:00:00 ".into(),
    }
}

/// Backend whose failure can be switched on mid-test.
#[derive(Default)]
pub struct FakeBackend {
    rows: Mutex<Vec<RawRecord>>,
    failure: Mutex<Option<String>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn with_rows(rows: Vec<RawRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), BackendError> {
        match self.failure.lock().unwrap().as_deref() {
            Some(message) => Err(BackendError::service(message)),
            None => Ok(()),
        }
    }
}

impl RecordBackend for FakeBackend {
    async fn list_rows(&self) -> Result<Vec<RawRecord>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert_row(&self, record: &NewRecord) -> Result<Vec<RawRecord>, BackendError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = raw(&format!("rec-new{n}"), &record.title, record.duration_minutes);
        self.rows.lock().unwrap().push(row.clone());
        Ok(vec![row])
    }

    async fn update_row(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Vec<RawRecord>, BackendError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .filter(|row| row.id == id)
            .map(|row| {
                row.title.clone_from(&record.title);
                row.duration_minutes = record.duration_minutes;
                row.updated_at = NOW.to_string();
                row.clone()
            })
            .collect())
    }

    async fn delete_row(&self, id: &str) -> Result<(), BackendError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}

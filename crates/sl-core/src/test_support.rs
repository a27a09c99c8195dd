//! In-memory backend for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, RecordBackend};
use crate::entities::{NewRecord, RawRecord};

#[derive(Default)]
pub struct FakeBackend {
    rows: Mutex<Vec<RawRecord>>,
    failure: Option<String>,
    next_id: AtomicUsize,
}

impl FakeBackend {
    pub const NOW: &'static str = "2024-06-01T00:00:00+00:00";

    pub fn with_rows(rows: Vec<RawRecord>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn row(id: &str, title: &str, minutes: i64, ts: &str) -> RawRecord {
        RawRecord {
            id: id.into(),
            title: title.into(),
            duration_minutes: minutes,
            created_at: ts.into(),
            updated_at: ts.into(),
        }
    }

    fn check(&self) -> Result<(), BackendError> {
        match &self.failure {
            Some(message) => Err(BackendError::service(message.clone())),
            None => Ok(()),
        }
    }
}

impl RecordBackend for FakeBackend {
    async fn list_rows(&self) -> Result<Vec<RawRecord>, BackendError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert_row(&self, record: &NewRecord) -> Result<Vec<RawRecord>, BackendError> {
        self.check()?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = Self::row(
            &format!("rec-fake{n}"),
            &record.title,
            record.duration_minutes,
            Self::NOW,
        );
        self.rows.lock().unwrap().push(row.clone());
        Ok(vec![row])
    }

    async fn update_row(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Vec<RawRecord>, BackendError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .filter(|row| row.id == id)
            .map(|row| {
                row.title.clone_from(&record.title);
                row.duration_minutes = record.duration_minutes;
                row.updated_at = Self::NOW.to_string();
                row.clone()
            })
            .collect())
    }

    async fn delete_row(&self, id: &str) -> Result<(), BackendError> {
        self.check()?;
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }
}

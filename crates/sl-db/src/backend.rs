//! [`RecordBackend`] over the libSQL repository.
//!
//! Update returns an empty row list when nothing matched, and delete of a
//! missing id succeeds, matching what a PostgREST endpoint answers.

use sl_core::backend::{BackendError, RecordBackend};
use sl_core::entities::{NewRecord, RawRecord};

use crate::StudyDb;

impl RecordBackend for StudyDb {
    async fn list_rows(&self) -> Result<Vec<RawRecord>, BackendError> {
        Ok(self.list_records().await?)
    }

    async fn insert_row(&self, record: &NewRecord) -> Result<Vec<RawRecord>, BackendError> {
        Ok(vec![self.insert_record(record).await?])
    }

    async fn update_row(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Vec<RawRecord>, BackendError> {
        Ok(self.update_record(id, record).await?.into_iter().collect())
    }

    async fn delete_row(&self, id: &str) -> Result<(), BackendError> {
        self.delete_record(id).await?;
        Ok(())
    }
}

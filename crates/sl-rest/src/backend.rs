//! [`RecordBackend`] over the PostgREST client.

use sl_core::backend::{BackendError, RecordBackend};
use sl_core::entities::{NewRecord, RawRecord};

use crate::RestClient;

impl RecordBackend for RestClient {
    async fn list_rows(&self) -> Result<Vec<RawRecord>, BackendError> {
        Ok(self.list().await?)
    }

    async fn insert_row(&self, record: &NewRecord) -> Result<Vec<RawRecord>, BackendError> {
        Ok(self.insert(record).await?)
    }

    async fn update_row(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Vec<RawRecord>, BackendError> {
        Ok(self.update(id, record).await?)
    }

    async fn delete_row(&self, id: &str) -> Result<(), BackendError> {
        Ok(self.delete(id).await?)
    }
}

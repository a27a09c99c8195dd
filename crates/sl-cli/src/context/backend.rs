use sl_core::backend::{BackendError, RecordBackend};
use sl_core::entities::{NewRecord, RawRecord};
use sl_db::StudyDb;
use sl_rest::RestClient;

/// The configured record store.
pub enum Backend {
    Libsql(StudyDb),
    Rest(RestClient),
}

impl Backend {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Libsql(_) => "libsql",
            Self::Rest(_) => "rest",
        }
    }
}

impl RecordBackend for Backend {
    async fn list_rows(&self) -> Result<Vec<RawRecord>, BackendError> {
        match self {
            Self::Libsql(db) => db.list_rows().await,
            Self::Rest(client) => client.list_rows().await,
        }
    }

    async fn insert_row(&self, record: &NewRecord) -> Result<Vec<RawRecord>, BackendError> {
        match self {
            Self::Libsql(db) => db.insert_row(record).await,
            Self::Rest(client) => client.insert_row(record).await,
        }
    }

    async fn update_row(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> Result<Vec<RawRecord>, BackendError> {
        match self {
            Self::Libsql(db) => db.update_row(id, record).await,
            Self::Rest(client) => client.update_row(id, record).await,
        }
    }

    async fn delete_row(&self, id: &str) -> Result<(), BackendError> {
        match self {
            Self::Libsql(db) => db.delete_row(id).await,
            Self::Rest(client) => client.delete_row(id).await,
        }
    }
}

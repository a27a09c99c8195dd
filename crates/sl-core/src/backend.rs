//! The seam between Studylog and whatever stores the study records.
//!
//! A backend exposes exactly four operations over flat [`RawRecord`] rows.
//! Implementations live in `sl-db` (libSQL) and `sl-rest` (PostgREST over
//! HTTP). Whatever the transport, failures are reported as
//! [`BackendError`] carrying the backend's own message.

use std::future::Future;

use thiserror::Error;

use crate::entities::{NewRecord, RawRecord};

/// A failed backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered and reported an error.
    #[error("{message}")]
    Service { message: String },

    /// The backend could not be reached or the exchange broke off.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a row that does not fit the record shape.
    #[error("malformed row: {0}")]
    Malformed(String),
}

impl BackendError {
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// The human-readable message, without any prefix added here.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Service { message } => message,
            Self::Transport(message) | Self::Malformed(message) => message,
        }
    }
}

/// CRUD access to the study record table.
pub trait RecordBackend {
    /// Every row, in the backend's own order.
    fn list_rows(&self) -> impl Future<Output = Result<Vec<RawRecord>, BackendError>>;

    /// Insert one row and return what the backend stored.
    fn insert_row(
        &self,
        record: &NewRecord,
    ) -> impl Future<Output = Result<Vec<RawRecord>, BackendError>>;

    /// Overwrite title and duration of the row with `id`.
    fn update_row(
        &self,
        id: &str,
        record: &NewRecord,
    ) -> impl Future<Output = Result<Vec<RawRecord>, BackendError>>;

    /// Delete the row with `id`.
    fn delete_row(&self, id: &str) -> impl Future<Output = Result<(), BackendError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_message_verbatim() {
        let err = BackendError::service("relation \"study-record\" does not exist");
        assert_eq!(err.to_string(), "relation \"study-record\" does not exist");
        assert_eq!(err.message(), "relation \"study-record\" does not exist");
    }

    #[test]
    fn transport_error_keeps_bare_message() {
        let err = BackendError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert_eq!(err.message(), "connection refused");
    }
}

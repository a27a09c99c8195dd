//! Cross-cutting error types for Studylog.
//!
//! Backend failures have their own type (`BackendError`, in `backend`) because
//! they cross the seam between this crate and the backend crates. Form
//! validation failures are collected in `validation::ValidationErrors`.

use thiserror::Error;

/// Errors that can be raised by any Studylog crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A constructor received a value outside its accepted range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

//! Entity structs for Studylog.
//!
//! `RawRecord` is the flat row shape every backend speaks; `StudyRecord` is
//! the display-ready shape produced by normalization. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod record;

pub use record::{NewRecord, RawRecord, StudyRecord};

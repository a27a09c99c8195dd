//! # sl-core
//!
//! Core types and pure logic for Studylog.
//!
//! This crate provides the pieces shared by every Studylog crate:
//! - Entity structs for study records (raw backend rows and display rows)
//! - Display timestamp formatting and row normalization
//! - The `RecordBackend` seam implemented by the libSQL and REST backends
//! - `RecordService`, the data-access layer over a backend
//! - Client-side pagination and form validation
//! - Cross-cutting error types

pub mod backend;
pub mod entities;
pub mod errors;
pub mod normalize;
pub mod pagination;
pub mod service;
pub mod timefmt;
pub mod validation;

#[cfg(test)]
mod test_support;

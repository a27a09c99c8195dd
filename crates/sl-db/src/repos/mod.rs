//! Repository methods on [`crate::StudyDb`].

pub mod record;

//! Create/edit form validation.
//!
//! Drafts hold exactly what the user typed. Validation collects every field
//! error before giving up, and a draft with errors never turns into a
//! [`NewRecord`], so it cannot reach a backend.

use serde::Serialize;
use thiserror::Error;

use crate::entities::NewRecord;

pub const TITLE_REQUIRED: &str = "内容の入力は必須です";
pub const DURATION_REQUIRED: &str = "時間の入力は必須です";
pub const DURATION_NOT_NUMBER: &str = "時間は数値で入力してください";
pub const DURATION_NOT_WHOLE: &str = "時間は分単位の整数で入力してください";
pub const DURATION_NOT_POSITIVE: &str = "時間は0より大きい値を入力してください";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every field error found in one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(" / ")
}

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message attached to `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push(FieldError { field, message });
    }
}

/// Raw form input for the create and edit dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub title: String,
    pub duration: String,
}

impl RecordDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: duration.into(),
        }
    }

    /// Check the draft and produce the record to send.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing each failing field.
    pub fn validate(&self) -> Result<NewRecord, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(Field::Title, TITLE_REQUIRED);
        }

        let duration = self.duration.trim();
        let minutes = if duration.is_empty() {
            errors.push(Field::Duration, DURATION_REQUIRED);
            None
        } else {
            match duration.parse::<i64>() {
                Ok(m) if m > 0 => Some(m),
                Ok(_) => {
                    errors.push(Field::Duration, DURATION_NOT_POSITIVE);
                    None
                }
                Err(_) => {
                    errors.push(Field::Duration, non_integer_message(duration));
                    None
                }
            }
        };

        match minutes {
            Some(minutes) if errors.is_empty() => Ok(NewRecord::new(title, minutes)),
            _ => Err(errors),
        }
    }
}

/// Minutes are stored as integers, so numeric input that is not a whole
/// number gets its own message.
fn non_integer_message(duration: &str) -> &'static str {
    match duration.parse::<f64>() {
        Ok(value) if value.is_finite() && value <= 0.0 => DURATION_NOT_POSITIVE,
        Ok(value) if value.is_finite() => DURATION_NOT_WHOLE,
        _ => DURATION_NOT_NUMBER,
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Backends key rows by text or by integer; both read as a string id.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A study record row exactly as a backend returns it.
///
/// The duration column is called `time` on the wire. Timestamps are kept as
/// the backend's strings; a missing timestamp deserializes to `""`, which
/// later formats as `Invalid Date`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    #[schemars(with = "String")]
    pub id: String,
    pub title: String,
    #[serde(rename = "time")]
    pub duration_minutes: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub created_at: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub updated_at: String,
}

/// The writable fields of a study record, sent on insert and update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRecord {
    pub title: String,
    #[serde(rename = "time")]
    pub duration_minutes: i64,
}

impl NewRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
        }
    }
}

/// One study-log entry in display shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyRecord {
    pub id: String,
    pub title: String,
    pub duration_minutes: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl StudyRecord {
    /// Wrap a backend row without touching its timestamps.
    ///
    /// Insert and update responses come back through here, so their
    /// timestamps stay in the backend's own format until the next reload.
    #[must_use]
    pub fn from_raw_unformatted(raw: RawRecord) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            duration_minutes: raw.duration_minutes,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn raw_record_reads_time_column() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"id":"rec-1","title":"Rust","time":45,"created_at":"2024-05-01T03:04:05Z","updated_at":"2024-05-01T03:04:05Z"}"#,
        )
        .unwrap();
        assert_eq!(raw.duration_minutes, 45);
        assert_eq!(raw.title, "Rust");
    }

    #[test]
    fn raw_record_accepts_integer_id() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"id":12,"title":"Rust","time":45}"#).unwrap();
        assert_eq!(raw.id, "12");
        assert_eq!(raw.created_at, "");
    }

    #[test]
    fn raw_record_null_timestamp_reads_empty() {
        let raw: RawRecord = serde_json::from_str(
            r#"{"id":"rec-1","title":"Rust","time":45,"created_at":null,"updated_at":null}"#,
        )
        .unwrap();
        assert_eq!(raw.created_at, "");
        assert_eq!(raw.updated_at, "");
    }

    #[test]
    fn raw_record_tolerates_missing_timestamps() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"id":"rec-1","title":"Rust","time":45}"#).unwrap();
        assert!(raw.created_at.is_empty());
        assert!(raw.updated_at.is_empty());
    }

    #[test]
    fn new_record_serializes_wire_names() {
        let body = serde_json::to_value(NewRecord::new("Go", 30)).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Go", "time": 30}));
    }

    #[test]
    fn unformatted_keeps_raw_timestamps() {
        let record = StudyRecord::from_raw_unformatted(RawRecord {
            id: "rec-1".into(),
            title: "Rust".into(),
            duration_minutes: 10,
            created_at: "2024-05-01T03:04:05.123456+00:00".into(),
            updated_at: "2024-05-01T03:04:05.123456+00:00".into(),
        });
        assert_eq!(record.created_at, "2024-05-01T03:04:05.123456+00:00");
    }
}

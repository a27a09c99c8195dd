//! REST (PostgREST / Supabase) backend configuration.

use serde::{Deserialize, Serialize};

fn default_table() -> String {
    "study-record".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`). `/rest/v1` is appended.
    #[serde(default)]
    pub url: String,

    /// Anon or service key, sent as both `apikey` and bearer token.
    #[serde(default)]
    pub api_key: String,

    /// Table holding the study records.
    #[serde(default = "default_table")]
    pub table: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RestConfig {
    /// Check if the REST config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = RestConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.table, "study-record");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn configured_when_url_and_key_set() {
        let config = RestConfig {
            url: "https://abcd.supabase.co".into(),
            api_key: "anon-key".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}

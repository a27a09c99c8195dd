//! libSQL backend configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    ".studylog/studylog.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibsqlConfig {
    /// Local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://studylog-me.turso.io`).
    /// When set together with `auth_token`, the remote database is used
    /// instead of `path`.
    #[serde(default)]
    pub url: String,

    /// Database auth token for the remote URL.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for LibsqlConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl LibsqlConfig {
    /// Check if the remote URL and token are both present.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

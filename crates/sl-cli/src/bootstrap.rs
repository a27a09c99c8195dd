use anyhow::Context;
use sl_config::SlConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config (or the `--config` file in place of
/// the project-local one).
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SlConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env file"),
    }

    match &flags.config {
        Some(path) => SlConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => SlConfig::load().context("failed to load studylog config"),
    }
}

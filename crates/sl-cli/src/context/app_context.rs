use std::time::Duration;

use anyhow::Context;
use sl_config::{BackendKind, SlConfig};
use sl_core::service::RecordService;
use sl_db::StudyDb;
use sl_rest::RestClient;

use crate::context::Backend;
use crate::state::Controller;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub controller: Controller<Backend>,
}

impl AppContext {
    /// Open the configured backend and build the view controller over it.
    pub async fn init(config: &SlConfig) -> anyhow::Result<Self> {
        let clock = config.display.clock()?;
        let paginator = config.general.paginator()?;
        let backend = open_backend(config).await?;

        let service = RecordService::new(backend, clock);
        let controller = Controller::new(service, paginator, config.general.reconcile);
        tracing::debug!(
            backend = controller.service().backend().name(),
            clock = config.display.clock.as_str(),
            "backend ready"
        );

        Ok(Self { controller })
    }
}

async fn open_backend(config: &SlConfig) -> anyhow::Result<Backend> {
    match config.validate_backend()? {
        BackendKind::Libsql if config.libsql.is_remote() => {
            let db = StudyDb::open_remote(&config.libsql.url, &config.libsql.auth_token)
                .await
                .with_context(|| format!("failed to open libsql database {}", config.libsql.url))?;
            Ok(Backend::Libsql(db))
        }
        BackendKind::Libsql => {
            let db = StudyDb::open_local(&config.libsql.path)
                .await
                .with_context(|| format!("failed to open libsql database {}", config.libsql.path))?;
            Ok(Backend::Libsql(db))
        }
        BackendKind::Rest => {
            let client = RestClient::new(
                &config.rest.url,
                &config.rest.api_key,
                &config.rest.table,
                Duration::from_secs(config.rest.timeout_secs),
            )
            .context("failed to build REST client")?;
            Ok(Backend::Rest(client))
        }
    }
}

#[cfg(test)]
mod tests {
    use sl_config::{BackendKind, SlConfig};

    use super::AppContext;

    #[tokio::test]
    async fn init_opens_in_memory_libsql() {
        let mut config = SlConfig::default();
        config.libsql.path = ":memory:".into();

        let mut ctx = AppContext::init(&config).await.expect("context should init");
        assert_eq!(ctx.controller.service().backend().name(), "libsql");
        ctx.controller.reload().await.expect("reload should work");
        assert!(ctx.controller.list().records().is_empty());
    }

    #[tokio::test]
    async fn init_builds_rest_backend_without_network() {
        let mut config = SlConfig::default();
        config.backend.kind = BackendKind::Rest;
        config.rest.url = "https://abcd.supabase.co".into();
        config.rest.api_key = "anon".into();

        let ctx = AppContext::init(&config).await.expect("context should init");
        assert_eq!(ctx.controller.service().backend().name(), "rest");
    }

    #[tokio::test]
    async fn init_rejects_unconfigured_rest() {
        let mut config = SlConfig::default();
        config.backend.kind = BackendKind::Rest;
        assert!(AppContext::init(&config).await.is_err());
    }

    #[tokio::test]
    async fn init_rejects_zero_page_size() {
        let mut config = SlConfig::default();
        config.libsql.path = ":memory:".into();
        config.general.page_size = 0;
        let error = AppContext::init(&config).await.err().expect("should fail");
        assert!(format!("{error:#}").contains("general.page_size"));
    }
}

use sl_config::{ENV_PREFIX, SlConfig};

const SECTIONS: [&str; 5] = ["BACKEND", "LIBSQL", "REST", "DISPLAY", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SlConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SlConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("{ENV_PREFIX}{section}_");
        let double = format!("{ENV_PREFIX}{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            let field = &key[single.len()..];
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and field (example: {double}{field})."
            ));
        }
    }

    if !config.rest.is_configured() && has_env_prefix(&env_keys, &format!("{ENV_PREFIX}REST")) {
        warnings.push(format!(
            "REST config appears incomplete while {ENV_PREFIX}REST* env vars exist. Set both {ENV_PREFIX}REST__URL and {ENV_PREFIX}REST__API_KEY."
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sl_config::SlConfig;

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = SlConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("STUDYLOG_GENERAL_PAGE_SIZE", "10"),
                ("STUDYLOG_DISPLAY_CLOCK", "offset"),
            ]),
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("STUDYLOG_DISPLAY__CLOCK"));
        assert!(warnings[1].contains("STUDYLOG_GENERAL__PAGE_SIZE"));
    }

    #[test]
    fn warns_when_rest_env_present_but_unconfigured() {
        let config = SlConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[("STUDYLOG_REST__URL", "https://abcd.supabase.co")]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("STUDYLOG_REST__API_KEY"));
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let mut config = SlConfig::default();
        config.rest.url = "https://abcd.supabase.co".into();
        config.rest.api_key = "anon".into();

        let warnings = collect_unconfigured_warnings(
            &config,
            env(&[
                ("STUDYLOG_REST__URL", "https://abcd.supabase.co"),
                ("STUDYLOG_REST__API_KEY", "anon"),
                ("STUDYLOG_GENERAL__PAGE_SIZE", "10"),
                ("STUDYLOG_LOG", "debug"),
            ]),
        );
        assert!(warnings.is_empty());
    }
}

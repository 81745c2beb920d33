//! Source configuration read from the environment.

use std::env;
use std::time::Duration;

use tracing::warn;

const DEFAULT_OCA_BASE: &str = "https://www.oca.org";
const DEFAULT_ORTHOCAL_BASE: &str = "https://orthocal.info/api/gregorian";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Where and how the live adapters reach their sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Base URL of the OCA site, without a trailing slash.
    pub oca_base: String,
    /// Base URL of the orthocal Gregorian API, without a trailing slash.
    pub orthocal_base: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            oca_base: DEFAULT_OCA_BASE.to_string(),
            orthocal_base: DEFAULT_ORTHOCAL_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("lectionary/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SourceConfig {
    /// Builds a config from `LECTIONARY_*` variables, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base = |key: &str, fallback: String| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        let timeout = match lookup("LECTIONARY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).unwrap_or_else(|_| {
                warn!(value = raw.as_str(), "ignoring unparseable LECTIONARY_TIMEOUT_SECS");
                defaults.timeout
            }),
            None => defaults.timeout,
        };

        Self {
            oca_base: base("LECTIONARY_OCA_BASE", defaults.oca_base),
            orthocal_base: base("LECTIONARY_ORTHOCAL_BASE", defaults.orthocal_base),
            timeout,
            user_agent: lookup("LECTIONARY_USER_AGENT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SourceConfig {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        SourceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), SourceConfig::default());
    }

    #[test]
    fn overrides_bases_and_trims_trailing_slash() {
        let config = config_from(&[
            ("LECTIONARY_OCA_BASE", "http://localhost:8080/"),
            ("LECTIONARY_ORTHOCAL_BASE", "http://localhost:9090/api/gregorian"),
        ]);
        assert_eq!(config.oca_base, "http://localhost:8080");
        assert_eq!(config.orthocal_base, "http://localhost:9090/api/gregorian");
    }

    #[test]
    fn parses_timeout_and_ignores_garbage() {
        assert_eq!(
            config_from(&[("LECTIONARY_TIMEOUT_SECS", "30")]).timeout,
            Duration::from_secs(30)
        );
        assert_eq!(
            config_from(&[("LECTIONARY_TIMEOUT_SECS", "soon")]).timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn user_agent_defaults_to_crate_version() {
        assert!(config_from(&[]).user_agent.starts_with("lectionary/"));
        assert_eq!(config_from(&[("LECTIONARY_USER_AGENT", "bot/2")]).user_agent, "bot/2");
    }
}

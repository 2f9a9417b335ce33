//! Application Configuration
//!
//! Defaults are compiled in from `app.config.json`; the log level can be
//! overridden per page load with `?log=<level>`.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

const EMBEDDED_CONFIG: &str = include_str!("../app.config.json");

/// Query parameter that overrides `log_level`
pub const LOG_QUERY_PARAM: &str = "log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// One of trace, debug, info, warn, error
    pub log_level: String,
    /// Start from the bundled dataset instead of an empty board
    pub load_seed: bool,
    pub page_title: String,
    pub search_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            load_seed: true,
            page_title: "Schedules".to_string(),
            search_placeholder: "Search…".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Embedded defaults plus page query overrides.
    ///
    /// Returns the config together with any problem found on the way, since
    /// logging is not up yet when this runs.
    pub fn load() -> (Self, Option<ConfigError>) {
        let (mut config, mut problem) = match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };
        if let Err(e) = config.apply_overrides(query_param) {
            problem.get_or_insert(e);
        }
        (config, problem)
    }

    /// Apply overrides from a key lookup (the page query string in the browser).
    /// An invalid level is rejected and the current one kept.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(level) = lookup(LOG_QUERY_PARAM) {
            Level::from_str(&level).map_err(|_| ConfigError::LogLevel(level.clone()))?;
            self.log_level = level;
        }
        Ok(())
    }

    pub fn max_level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert!(config.load_seed);
        assert_eq!(config.max_level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AppConfig::from_json(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(config.max_level().unwrap(), Level::DEBUG);
        assert_eq!(config.page_title, "Schedules");
        assert!(config.load_seed);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_query_override() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == "log").then(|| "trace".to_string())).unwrap();
        assert_eq!(config.max_level().unwrap(), Level::TRACE);

        let err = config.apply_overrides(|_| Some("loud".to_string()));
        assert!(matches!(err, Err(ConfigError::LogLevel(_))));
        assert_eq!(config.log_level, "trace");

        config.apply_overrides(|_| None).unwrap();
        assert_eq!(config.log_level, "trace");
    }
}

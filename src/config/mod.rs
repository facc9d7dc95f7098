//! Configuration management for personio-absences
//!
//! Values come from an optional YAML file and are then overridden by
//! environment variables, so the tool can run from a scheduler with no
//! file at all.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Personio API base URL
pub const DEFAULT_API_HOST: &str = "https://api.personio.de";

/// Log level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub log: LogConfig,

    /// Personio API credentials
    pub personio: PersonioConfig,

    /// Slack delivery settings
    pub slack: SlackConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonioConfig {
    pub client_id: String,

    pub secret: String,

    /// Alternative API host (staging, local mock server)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

impl std::fmt::Debug for PersonioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonioConfig")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    pub webhook_url: String,
}

impl Config {
    /// Load, apply environment overrides and validate.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read when present and the environment is the only source otherwise.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load_from(PathBuf::from(p))?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load_from(default)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Override file values with non-empty environment variables.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(level) = get("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(client_id) = get("PERSONIO_CLIENT_ID") {
            self.personio.client_id = client_id;
        }
        if let Some(secret) = get("PERSONIO_SECRET") {
            self.personio.secret = secret;
        }
        if let Some(host) = get("PERSONIO_API_HOST") {
            self.personio.api_host = Some(host);
        }
        if let Some(url) = get("SLACK_WEBHOOK_URL") {
            self.slack.webhook_url = url;
        }
    }

    /// Fill defaults and check that everything the run needs is present.
    pub fn validate(&mut self) -> Result<()> {
        if self.log.level.trim().is_empty() {
            self.log.level = DEFAULT_LOG_LEVEL.to_string();
        }

        if self.personio.client_id.trim().is_empty() {
            return Err(ConfigError::Missing("personio.client_id").into());
        }
        if self.personio.secret.trim().is_empty() {
            return Err(ConfigError::Missing("personio.secret").into());
        }
        if self.slack.webhook_url.trim().is_empty() {
            return Err(ConfigError::Missing("slack.webhook_url").into());
        }

        check_http_url("slack.webhook_url", &self.slack.webhook_url)?;
        if let Some(ref host) = self.personio.api_host {
            check_http_url("personio.api_host", host)?;
        }

        Ok(())
    }

    /// Base URL for Personio requests, without a trailing slash
    pub fn api_base(&self) -> String {
        self.personio
            .api_host
            .as_deref()
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string()
    }

    /// Parsed log level, `None` when the configured value is not a level name
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log.level.trim().parse::<LevelFilter>().ok()
    }

    /// Resolve the file that `load_at` would read, if any
    pub fn resolve_path(path: Option<&str>) -> Option<PathBuf> {
        match path {
            Some(p) => Some(PathBuf::from(p)),
            None => Some(Path::new(DEFAULT_CONFIG_FILE).to_path_buf()).filter(|p| p.exists()),
        }
    }
}

fn check_http_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::Invalid(format!("{} is not a valid URL: {}", field, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Invalid(format!(
            "{} must use http or https, got '{}'",
            field, other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn complete_yaml() -> &'static str {
        "log:\n  level: info\npersonio:\n  client_id: id-123\n  secret: s3cret\nslack:\n  webhook_url: https://hooks.slack.com/services/T/B/X\n"
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_yaml() {
        let config = Config::from_yaml(complete_yaml()).unwrap();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.personio.client_id, "id-123");
        assert_eq!(config.personio.secret, "s3cret");
        assert!(config.personio.api_host.is_none());
        assert_eq!(
            config.slack.webhook_url,
            "https://hooks.slack.com/services/T/B/X"
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("  \n").unwrap();
        assert!(config.personio.client_id.is_empty());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config::from_yaml(complete_yaml()).unwrap();
        config.apply_env(env(&[
            ("PERSONIO_CLIENT_ID", "env-id"),
            ("PERSONIO_SECRET", ""),
            ("PERSONIO_API_HOST", "http://127.0.0.1:1234"),
        ]));

        assert_eq!(config.personio.client_id, "env-id");
        // empty variables do not clear file values
        assert_eq!(config.personio.secret, "s3cret");
        assert_eq!(config.api_base(), "http://127.0.0.1:1234");
    }

    #[test]
    fn test_env_only_config() {
        let mut config = Config::default();
        config.apply_env(env(&[
            ("PERSONIO_CLIENT_ID", "id"),
            ("PERSONIO_SECRET", "secret"),
            ("SLACK_WEBHOOK_URL", "https://example.com/hook"),
        ]));

        config.validate().unwrap();
        assert_eq!(config.log.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.api_base(), DEFAULT_API_HOST);
    }

    #[test]
    fn test_validate_missing_fields() {
        let mut config = Config::default();
        match config.validate() {
            Err(Error::Config(ConfigError::Missing(field))) => {
                assert_eq!(field, "personio.client_id")
            }
            other => panic!("Expected missing client_id, got {:?}", other),
        }

        config.personio.client_id = "id".to_string();
        config.personio.secret = "secret".to_string();
        match config.validate() {
            Err(Error::Config(ConfigError::Missing(field))) => {
                assert_eq!(field, "slack.webhook_url")
            }
            other => panic!("Expected missing webhook_url, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_webhook_url() {
        let mut config = Config::from_yaml(complete_yaml()).unwrap();
        config.slack.webhook_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::Invalid(_)))
        ));

        config.slack.webhook_url = "ftp://example.com/hook".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let mut config = Config::default();
        config.personio.api_host = Some("http://localhost:8080/".to_string());
        assert_eq!(config.api_base(), "http://localhost:8080");
    }

    #[test]
    fn test_level_filter() {
        let mut config = Config::default();
        config.log.level = "WARN".to_string();
        assert_eq!(config.level_filter(), Some(LevelFilter::Warn));

        config.log.level = "loud".to_string();
        assert_eq!(config.level_filter(), None);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Config::load_from(PathBuf::from("/nonexistent/config.yml"));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NotFound(_)))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::from_yaml(complete_yaml()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("id-123"));
    }
}

//! Configuration — TOML document with per-field defaults.
//!
//! Every field has a default matching the dashboard's standard cadence, so an
//! empty document is a valid configuration. Adapters layer their own overrides
//! on top before calling [`ClientConfig::validate`].

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend location.
    pub api: ApiConfig,
    /// Poll intervals.
    pub polling: PollingConfig,
    /// Button lock durations.
    pub actions: ActionsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the bot API lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix prepended to `/api/*` paths. Empty means same origin.
    pub base_url: String,
}

/// Repeating fetch intervals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub status_interval_ms: u64,
    pub logs_interval_ms: u64,
}

/// One-shot delays around user actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    /// How long the restart button stays locked after the request settles.
    pub restart_settle_ms: u64,
    /// How long the refresh button stays locked after a click.
    pub refresh_cooldown_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
}

impl ClientConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a duration is zero, the base
    /// URL ends with `/`, or the base URL is neither absolute nor rooted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("polling.status_interval_ms", self.polling.status_interval_ms),
            ("polling.logs_interval_ms", self.polling.logs_interval_ms),
            ("actions.restart_settle_ms", self.actions.restart_settle_ms),
            ("actions.refresh_cooldown_ms", self.actions.refresh_cooldown_ms),
        ];
        for (name, value) in durations {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{name} must be non-zero")));
            }
        }

        let base = &self.api.base_url;
        if base.ends_with('/') {
            return Err(ConfigError::Validation(
                "api.base_url must not end with '/'".to_string(),
            ));
        }
        let rooted =
            base.starts_with("http://") || base.starts_with("https://") || base.starts_with('/');
        if !base.is_empty() && !rooted {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be absolute or start with '/', got {base:?}"
            )));
        }
        Ok(())
    }

    /// Full URL of an API path such as `/api/status`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api.base_url)
    }

    #[must_use]
    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.polling.status_interval_ms)
    }

    #[must_use]
    pub fn logs_interval(&self) -> Duration {
        Duration::from_millis(self.polling.logs_interval_ms)
    }

    #[must_use]
    pub fn restart_settle(&self) -> Duration {
        Duration::from_millis(self.actions.restart_settle_ms)
    }

    #[must_use]
    pub fn refresh_cooldown(&self) -> Duration {
        Duration::from_millis(self.actions.refresh_cooldown_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_interval_ms: 10_000,
            logs_interval_ms: 30_000,
        }
    }
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            restart_settle_ms: 5_000,
            refresh_cooldown_ms: 1_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

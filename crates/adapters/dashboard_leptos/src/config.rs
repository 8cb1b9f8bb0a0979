//! Configuration loading for the browser build.
//!
//! The page has no file system, so `botwatch.toml` is embedded at compile
//! time. Build-time environment variables take precedence over file values:
//!
//! - `BOTWATCH_API_BASE` — `api.base_url`
//! - `BOTWATCH_LOG` — `logging.level`

use botwatch_app::{ClientConfig, ConfigError};

const EMBEDDED: &str = include_str!("../botwatch.toml");

/// Build-time overrides, captured by `option_env!`.
#[derive(Debug, Default)]
struct Overrides<'a> {
    api_base: Option<&'a str>,
    log_level: Option<&'a str>,
}

impl Overrides<'static> {
    fn from_build_env() -> Self {
        Self {
            api_base: option_env!("BOTWATCH_API_BASE"),
            log_level: option_env!("BOTWATCH_LOG"),
        }
    }
}

fn load_from(content: &str, overrides: &Overrides<'_>) -> Result<ClientConfig, ConfigError> {
    let mut config: ClientConfig = toml::from_str(content)?;
    if let Some(base) = overrides.api_base {
        config.api.base_url = base.to_string();
    }
    if let Some(level) = overrides.log_level {
        config.logging.level = level.to_string();
    }
    config.validate()?;
    Ok(config)
}

/// Load the embedded configuration with build-time overrides.
///
/// # Errors
///
/// Returns an error if the embedded TOML is malformed or fails validation.
pub fn load() -> Result<ClientConfig, ConfigError> {
    load_from(EMBEDDED, &Overrides::from_build_env())
}

/// Load the configuration and install the console logger at its level.
///
/// An invalid configuration is reported on the console and replaced by
/// the defaults.
pub fn init() -> ClientConfig {
    let loaded = load();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.logging.level.parse().ok())
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);

    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid dashboard configuration, using defaults");
        ClientConfig::default()
    })
}

//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::endpoint;
use crate::error::{Error, Result};
use crate::services::callout::CalloutStyle;

/// Configuration for the lookup pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Verse lookup URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// How callout continuation lines are rendered
    pub callout_style: CalloutStyle,
    /// Settings file override; the platform config dir is used when unset
    pub settings_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: endpoint::DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(endpoint::DEFAULT_TIMEOUT_SECS),
            callout_style: CalloutStyle::default(),
            settings_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup such as `env::var`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = var("KORBIBLE_ENDPOINT") {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::config(
                    format!("KORBIBLE_ENDPOINT must be an http(s) URL, got {url:?}"),
                    "Use a full URL such as http://ibibles.net/quote.php",
                ));
            }
            config.endpoint = url;
        }

        // Unparseable or zero timeouts fall back to the default
        if let Some(secs) = var("KORBIBLE_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("Ignoring invalid KORBIBLE_TIMEOUT_SECS={secs:?}"),
            }
        }

        if let Some(style) = var("KORBIBLE_CALLOUT_STYLE") {
            config.callout_style = style.parse().map_err(|()| {
                Error::config(
                    format!("Unknown callout style {style:?}"),
                    "Set KORBIBLE_CALLOUT_STYLE to `quoted` or `compat`",
                )
            })?;
        }

        config.settings_path = var("KORBIBLE_SETTINGS_PATH")
            .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()));

        Ok(config)
    }
}

//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tickema_feed::DEFAULT_WINDOW_US;
use tickema_ws::{ConnectionConfig, DEFAULT_FEED_URL};

/// Environment variable consulted when no `--config` flag is given.
pub const CONFIG_ENV_VAR: &str = "TICKEMA_CONFIG";

/// Path tried last. Missing is fine; defaults apply.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Smoothing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// EMA window in microseconds. Default: 5,000,000 (5 seconds).
    #[serde(default = "default_window_us")]
    pub window_us: u64,
}

fn default_window_us() -> u64 {
    DEFAULT_WINDOW_US
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_us: default_window_us(),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Feed endpoint.
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    /// Channel to subscribe to. Frames of this type carry samples.
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default)]
    pub smoothing: SmoothingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_ws_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_channel() -> String {
    "ticker".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            channel: default_channel(),
            smoothing: SmoothingConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve and load configuration.
    ///
    /// Precedence: explicit path > `TICKEMA_CONFIG` > `config/default.toml`.
    /// An explicit or env-provided path must exist; the default path may be
    /// absent, in which case built-in defaults are used.
    pub fn load(explicit: Option<&str>) -> AppResult<Self> {
        let config = match explicit
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;

        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.ws_url.starts_with("ws://") || self.ws_url.starts_with("wss://")) {
            return Err(AppError::Config(format!(
                "ws_url must be a ws:// or wss:// URL, got {}",
                self.ws_url
            )));
        }
        if self.channel.is_empty() {
            return Err(AppError::Config("channel must not be empty".to_string()));
        }
        if self.smoothing.window_us == 0 {
            return Err(AppError::Config(
                "smoothing.window_us must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Transport settings derived from this configuration.
    pub fn connection_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            url: self.ws_url.clone(),
            channel: self.channel.clone(),
        }
    }
}

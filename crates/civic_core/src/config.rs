//! Process configuration loaded from the environment.
//!
//! # Responsibility
//! - Resolve logging and store bootstrap options before startup.
//! - Reject malformed values instead of silently falling back.
//!
//! # Invariants
//! - Unset variables take build-mode defaults.
//! - A configured log directory is always absolute.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_LOG_LEVEL: &str = "CIVIC_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "CIVIC_LOG_DIR";
pub const ENV_SEED: &str = "CIVIC_SEED";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value, reason } => {
                write!(f, "invalid value `{value}` for {key}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Logging backend options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: &'static str,
    /// Rolling file directory; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

/// Startup configuration for the civic store process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub logging: LoggingConfig,
    /// Whether the store is populated with fixture data.
    pub seed: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            seed: true,
        }
    }
}

impl CoreConfig {
    /// Reads `CIVIC_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.logging.level = normalize_level(&value).ok_or(ConfigError::InvalidValue {
                key: ENV_LOG_LEVEL,
                value: value.clone(),
                reason: "expected trace|debug|info|warn|error",
            })?;
        }

        if let Some(value) = non_blank(lookup(ENV_LOG_DIR)) {
            let path = Path::new(value.trim());
            if !path.is_absolute() {
                return Err(ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value,
                    reason: "must be an absolute path",
                });
            }
            config.logging.log_dir = Some(path.to_path_buf());
        }

        if let Some(value) = non_blank(lookup(ENV_SEED)) {
            config.seed = parse_bool(&value).ok_or(ConfigError::InvalidValue {
                key: ENV_SEED,
                value: value.clone(),
                reason: "expected true|false|1|0",
            })?;
        }

        Ok(config)
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Option<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

//! Dashboard configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI arguments. Precedence, highest first: CLI > environment > file > defaults.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::report::OutputFormat;

/// Environment variable overriding `[general] log_level`
pub const ENV_LOG_LEVEL: &str = "BSM_LOG_LEVEL";
/// Environment variable overriding `[general] format`
pub const ENV_FORMAT: &str = "BSM_FORMAT";
/// Upper bound on `[curve] points`
pub const MAX_CURVE_POINTS: usize = 100_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid curve range: lower = {lower}, upper = {upper}. Need 0 < lower < upper")]
    InvalidCurveRange { lower: f64, upper: f64 },

    #[error("Invalid curve resolution: {0}. Need between 2 and 100000 points")]
    InvalidCurvePoints(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[general]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
        }
    }
}

/// `[defaults]` section: dashboard inputs used when a flag is omitted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub spot: f64,
    pub strike: f64,
    pub days: u32,
    pub rate_pct: f64,
    pub vol_pct: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 105.0,
            days: 365,
            rate_pct: 5.0,
            vol_pct: 20.0,
        }
    }
}

/// `[curve]` section: spot grid as multiples of the strike
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub lower: f64,
    pub upper: f64,
    pub points: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            lower: 0.7,
            upper: 1.3,
            points: 100,
        }
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub general: GeneralConfig,
    pub defaults: DefaultsConfig,
    pub curve: CurveConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s)
        .map_err(|_| serde::de::Error::custom(ConfigError::InvalidFormat(s)))
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::FileError(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Apply `BSM_LOG_LEVEL` and `BSM_FORMAT` overrides from the process environment
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `BSM_LOG_LEVEL` and `BSM_FORMAT` overrides read through `lookup`
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.apply_overrides(
            lookup(ENV_LOG_LEVEL).as_deref(),
            lookup(ENV_FORMAT).as_deref(),
        )?;
        Ok(self)
    }

    /// Apply explicit overrides (CLI flags or environment values)
    pub fn apply_overrides(
        &mut self,
        log_level: Option<&str>,
        format: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(level) = log_level {
            self.general.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = format {
            self.general.format = OutputFormat::from_str(format)
                .map_err(|_| ConfigError::InvalidFormat(format.to_string()))?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let CurveConfig {
            lower,
            upper,
            points,
        } = self.curve;
        if !(lower > 0.0 && lower < upper && upper.is_finite()) {
            return Err(ConfigError::InvalidCurveRange { lower, upper });
        }
        if !(2..=MAX_CURVE_POINTS).contains(&points) {
            return Err(ConfigError::InvalidCurvePoints(points));
        }
        Ok(())
    }
}

/// Build the effective configuration: file, then environment, then CLI flags
pub fn build_config(
    path: &Path,
    cli_log_level: Option<&str>,
    cli_format: Option<&str>,
) -> Result<CliConfig, ConfigError> {
    build_config_with(path, |key| std::env::var(key).ok(), cli_log_level, cli_format)
}

/// [`build_config`] with environment variables read through `lookup`
pub fn build_config_with<F>(
    path: &Path,
    lookup: F,
    cli_log_level: Option<&str>,
    cli_format: Option<&str>,
) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = CliConfig::from_file(path)?.apply_env_with(lookup)?;
    config.apply_overrides(cli_log_level, cli_format)?;
    config.validate()?;
    Ok(config)
}

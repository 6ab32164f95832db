//! # Configuration
//!
//! Centralizes the few settings the calculator has, with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.base27/config.toml`. A missing file just means
//! defaults. The base and alphabet are fixed and cannot be configured.

use log::{debug, info, warn};
use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Base27Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
    pub level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PROMPT: &str = "\t\t>>> ";

pub const ENV_PROMPT: &str = "BASE27_PROMPT";
pub const ENV_LOG_FILE: &str = "BASE27_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "BASE27_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options except the log file)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub prompt: String,
    /// No file means logging stays off; stdout carries the results.
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
}

/// Settings given on the command line. `None` means "not specified".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub prompt: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.base27/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".base27").join("config.toml"))
}

/// Load config from `~/.base27/config.toml`, or defaults if there is none.
pub fn load_config() -> Result<Base27Config, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(Base27Config::default())
        }
    }
}

/// Load config from an explicit path. A missing file yields defaults;
/// a malformed one yields `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<Base27Config, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(Base27Config::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: Base27Config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve against the real process environment.
pub fn resolve(config: &Base27Config, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `env` looks up a variable by name. Unparseable log levels from the
/// environment are ignored.
pub fn resolve_with_env<F>(config: &Base27Config, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let prompt = cli
        .prompt
        .clone()
        .or_else(|| env(ENV_PROMPT))
        .or_else(|| config.general.prompt.clone())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE).filter(|s| !s.is_empty()).map(PathBuf::from))
        .or_else(|| config.logging.file.clone());

    let log_level = cli
        .log_level
        .or_else(|| env(ENV_LOG_LEVEL).and_then(|s| LogLevel::parse(&s)))
        .or(config.logging.level)
        .unwrap_or_default();

    ResolvedConfig {
        prompt,
        log_file,
        log_level,
    }
}

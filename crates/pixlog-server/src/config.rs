//! Server configuration loading from file and environment variables.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Activity log location.
    #[serde(default)]
    pub data: DataConfig,

    /// Leaderboard sizing.
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Activity log configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the tab-separated activity log loaded at startup.
    #[serde(default = "default_data_path")]
    pub path: String,
}

/// Leaderboard sizing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LeaderboardConfig {
    /// Rows returned when a request does not specify `limit`.
    #[serde(default = "default_leaderboard_limit")]
    pub default_limit: usize,

    /// Upper bound on a requested `limit`.
    #[serde(default = "default_leaderboard_max")]
    pub max_limit: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "pixlog_store=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    8182
}

fn default_data_path() -> String {
    "pixels.log".to_string()
}

fn default_leaderboard_limit() -> usize {
    10
}

fn default_leaderboard_max() -> usize {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            default_limit: default_leaderboard_limit(),
            max_limit: default_leaderboard_max(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LeaderboardConfig {
    /// Resolves a requested row count against the configured default and cap.
    ///
    /// The result is always at least 1.
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        let max = self.max_limit.max(1);
        requested.unwrap_or(self.default_limit).clamp(1, max)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parses configuration from TOML text. Missing sections take defaults.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the text is not valid configuration.
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `PIXLOG_HOST` overrides `server.host`
/// - `PIXLOG_PORT` overrides `server.port`
/// - `PIXLOG_DATA_PATH` overrides `data.path`
/// - `PIXLOG_LOG_LEVEL` overrides `logging.level`
/// - `PIXLOG_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => parse_config(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    if let Ok(host) = std::env::var("PIXLOG_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("PIXLOG_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(data_path) = std::env::var("PIXLOG_DATA_PATH") {
        config.data.path = data_path;
    }
    if let Ok(level) = std::env::var("PIXLOG_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("PIXLOG_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Application configuration.
///
/// Layered as built-in defaults, then an optional TOML file, then
/// environment overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub api_token: Option<String>,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default = "default_overtime_start")]
    pub fixed_overtime_start: String,

    #[serde(default = "default_overtime_end")]
    pub fixed_overtime_end: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub simulate: bool,

    #[serde(default)]
    pub mode: RunMode,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8080/api/".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_file() -> String {
    "overtime_mcp.log".to_string()
}

fn default_overtime_start() -> String {
    "18:00".to_string()
}

fn default_overtime_end() -> String {
    "21:00".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            log_level: LogLevel::default(),
            fixed_overtime_start: default_overtime_start(),
            fixed_overtime_end: default_overtime_end(),
            request_timeout_secs: default_request_timeout_secs(),
            simulate: false,
            mode: RunMode::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config_path` (if it exists) and the process environment
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::from_file(config_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read the TOML file, or fall back to defaults when it does not exist
    pub fn from_file(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(
                "Configuration file {} not found, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read configuration file {}", config_path.display()))?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }

    /// Apply environment overrides using `lookup` to resolve variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("OVERTIME_API_URL") {
            self.api_url = url;
        }
        if let Some(token) = lookup("OVERTIME_API_TOKEN") {
            self.api_token = Some(token).filter(|t| !t.trim().is_empty());
        }
        if let Some(dir) = lookup("OVERTIME_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("OVERTIME_LOG_FILE") {
            self.log_file = file;
        }
        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            self.log_level = level.parse().context("Invalid MCP_LOG_LEVEL")?;
        }
        if let Some(flag) = lookup("MCP_SIMULATE") {
            self.simulate = parse_flag(&flag);
        }
        if let Some(mode) = lookup("JABANMCP_MODE") {
            self.mode = mode.parse().context("Invalid JABANMCP_MODE")?;
        }
        Ok(())
    }

    /// Full path of the log file
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Logging verbosity, spelled the way operators write it in config files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            // tracing has no level above error
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

/// A config value that does not name a known option
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValueError {
    #[error("unknown log level: {0}")]
    LogLevel(String),

    #[error("unknown mode: {0}")]
    Mode(String),
}

impl FromStr for LogLevel {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, ConfigValueError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(ConfigValueError::LogLevel(other.to_string())),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigValueError;

    fn try_from(value: String) -> Result<Self, ConfigValueError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
        .to_string()
    }
}

/// How the binary serves requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// JSON-RPC over stdin/stdout
    #[default]
    Mcp,
    /// Operator console prompting for dates
    Interactive,
}

impl FromStr for RunMode {
    type Err = ConfigValueError;

    fn from_str(s: &str) -> Result<Self, ConfigValueError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mcp" => Ok(RunMode::Mcp),
            "interactive" => Ok(RunMode::Interactive),
            other => Err(ConfigValueError::Mode(other.to_string())),
        }
    }
}

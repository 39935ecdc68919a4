//! Configuration for the overtime API client.

use crate::error::{ClientError, ClientResult};
use jiaban_core::AppConfig;
use std::time::Duration;
use url::Url;

/// Configuration for the HTTP task executor.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the overtime API. Always ends with `/`.
    pub base_url: Url,
    /// Bearer token for authentication.
    pub api_token: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Start of the fixed overtime window (HH:MM).
    pub overtime_start: String,
    /// End of the fixed overtime window (HH:MM).
    pub overtime_end: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            api_token: None,
            timeout: Duration::from_secs(30),
            overtime_start: "18:00".to_string(),
            overtime_end: "21:00".to_string(),
        }
    }

    /// Build client settings from the application configuration.
    pub fn from_app_config(config: &AppConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.api_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "API URL must be http or https, got: {}",
                base_url.scheme()
            )));
        }

        Ok(Self {
            base_url: with_trailing_slash(base_url),
            api_token: config.api_token.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            overtime_start: config.fixed_overtime_start.clone(),
            overtime_end: config.fixed_overtime_end.clone(),
        })
    }
}

// Url::join drops the last path segment unless the base ends with a slash
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

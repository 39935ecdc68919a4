// Log setup: stderr plus a log file. stdout carries protocol messages only.

use anyhow::{Context, Result};
use jiaban_core::{AppConfig, LogLevel};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the file writer alive; drop it only at process exit
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Install the process-wide subscriber built from `config`
pub fn init(config: &AppConfig) -> Result<LogGuard> {
    std::fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create log directory {}", config.log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(config.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(LogGuard { _file: guard })
}

/// `RUST_LOG` wins when set; otherwise the configured level
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_directive()))
}

/// Startup summary of the effective configuration
pub fn log_startup_banner(config: &AppConfig, version: &str) {
    tracing::info!("{}", "=".repeat(50));
    tracing::info!("Overtime MCP server starting");
    tracing::info!("Version: {}", version);
    tracing::info!("API URL: {}", config.api_url);
    tracing::info!(
        "Fixed overtime window: {} - {}",
        config.fixed_overtime_start,
        config.fixed_overtime_end
    );
    tracing::info!("Log file: {}", config.log_path().display());
    tracing::info!("Mode: {:?}, simulate: {}", config.mode, config.simulate);
    tracing::info!("{}", "=".repeat(50));
}

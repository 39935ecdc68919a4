// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use jiaban_client::{ClientConfig, HttpTaskExecutor};
use jiaban_core::{AppConfig, RunMode, SimulatedExecutor, TaskExecutor};
use jiaban_mcp::{interactive, logging, version, McpServer, ServeExit, TaskDispatcher};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "jiaban-mcp")]
#[command(about = "Overtime submission exposed as MCP tools over stdio", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "jiaban.toml")]
    config: PathBuf,

    /// Serving mode: mcp or interactive (overrides config and JABANMCP_MODE)
    #[arg(short, long)]
    mode: Option<RunMode>,

    /// Use the offline executor instead of the remote API
    #[arg(long)]
    simulate: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if args.simulate {
        config.simulate = true;
    }

    let _log_guard = logging::init(&config)?;
    logging::log_startup_banner(&config, version::server_version());

    let executor: Arc<dyn TaskExecutor> = if config.simulate {
        tracing::info!("Simulation enabled, no requests will reach the API");
        Arc::new(SimulatedExecutor::new())
    } else {
        if config.api_token.is_none() {
            tracing::warn!("OVERTIME_API_TOKEN is not set, API calls will likely be rejected");
        }
        Arc::new(HttpTaskExecutor::new(ClientConfig::from_app_config(&config)?)?)
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    let exit = match config.mode {
        RunMode::Mcp => McpServer::new(executor).serve(stdin, stdout).await?,
        RunMode::Interactive => {
            interactive::run(&TaskDispatcher::new(executor), stdin, stdout).await?
        }
    };

    Ok(match exit {
        ServeExit::EndOfInput => ExitCode::SUCCESS,
        ServeExit::AuthExpired => ExitCode::from(2),
    })
}

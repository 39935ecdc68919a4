// Operator console: prompt for dates and submit overtime with content from the daily report

use crate::dispatch::TaskDispatcher;
use crate::server::ServeExit;
use crate::tools;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{error, info, warn};

const PROMPT: &str = "\nEnter overtime date (YYYY-MM-DD, e.g. 2026-01-06), or 'quit' to exit: ";
const QUIT: &str = "quit";

/// Run the console until `quit`, end of input, or authentication expiry
pub async fn run<R, W>(dispatcher: &TaskDispatcher, reader: R, mut writer: W) -> Result<ServeExit>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Entering interactive mode (type '{}' to exit)", QUIT);
    let mut lines = reader.lines();

    loop {
        writer
            .write_all(PROMPT.as_bytes())
            .await
            .context("Failed to write prompt")?;
        writer.flush().await.context("Failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            info!("Input closed, leaving interactive mode");
            return Ok(ServeExit::EndOfInput);
        };

        let date = line.trim();
        if date.eq_ignore_ascii_case(QUIT) {
            info!("Operator left interactive mode");
            return Ok(ServeExit::EndOfInput);
        }
        if date.is_empty() {
            warn!("Overtime date must not be empty");
            continue;
        }
        if let Err(err) = tools::validate_date(date) {
            warn!("{}", err);
            continue;
        }

        info!(date, "Operator triggered overtime submission, content from daily report");
        match dispatcher.dispatch_overtime(date, None).await {
            Ok(_) => info!("Submission finished, see the log file for details"),
            Err(err) if err.is_auth_expired() => {
                error!("{}. Update OVERTIME_API_TOKEN and restart.", err);
                return Ok(ServeExit::AuthExpired);
            }
            Err(err) => error!("Submission failed: {}", err),
        }
    }
}

//! # Jiaban Client
//!
//! HTTP implementation of [`jiaban_core::TaskExecutor`] for the overtime
//! submission API.
//!
//! ```rust,no_run
//! use jiaban_client::{ClientConfig, HttpTaskExecutor};
//! use jiaban_core::{AppConfig, TaskExecutor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_app_config(&AppConfig::default())?;
//! let executor = HttpTaskExecutor::new(config)?;
//!
//! let outcome = executor.execute("2026-01-07", None).await?;
//! println!("{}", outcome.task_status);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use executor::HttpTaskExecutor;
pub use transport::{ApiResponse, HttpTransport};

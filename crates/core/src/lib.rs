// Core types for the overtime submission adapter: task outcomes, the
// executor seam and application configuration

pub mod config;
pub mod error;
pub mod executor;
pub mod simulate;
pub mod types;

pub use config::{AppConfig, ConfigValueError, LogLevel, RunMode};
pub use error::{TaskError, TaskResult};
pub use executor::TaskExecutor;
pub use simulate::SimulatedExecutor;
pub use types::*;

// MCP (Model Context Protocol) server exposing overtime submission as tools
// Newline-delimited JSON-RPC 2.0 over stdin/stdout

pub mod dispatch;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod version;

#[cfg(test)]
mod testing;

pub use dispatch::TaskDispatcher;
pub use server::{McpServer, ServeExit};

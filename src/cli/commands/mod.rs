//! CLI command implementations.

mod analyze;
mod config;
mod mcp;
mod tools;

pub use analyze::run_analyze;
pub use config::run_config;
pub use mcp::run_mcp;
pub use tools::run_tools;

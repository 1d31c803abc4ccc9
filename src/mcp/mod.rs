//! MCP (Model Context Protocol) server.
//!
//! Exposes the comment analysis tool to AI assistants.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use protocol::{Tool, ToolAnnotations, ToolCallResult, ToolContent};
pub use server::McpServer;
pub use tools::get_tools;

//! Tools command - print the MCP tool definitions.

use crate::mcp::get_tools;
use anyhow::Result;

/// Print tool definitions as pretty JSON.
pub fn run_tools() -> Result<()> {
    let tools = get_tools();
    println!("{}", serde_json::to_string_pretty(&tools)?);
    Ok(())
}

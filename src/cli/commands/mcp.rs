//! MCP command implementation.

use crate::analysis::CommentAnalyzer;
use crate::config::Settings;
use crate::mcp::McpServer;
use anyhow::Result;

/// Run the MCP server.
pub async fn run_mcp(settings: Settings) -> Result<()> {
    let analyzer = CommentAnalyzer::from_settings(&settings)?;
    let server = McpServer::new(analyzer);
    server.run().await
}

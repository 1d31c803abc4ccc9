//! yt-comment-analyzer - YouTube comments, ready for LLM analysis
//!
//! An MCP server exposing a single tool, `analyze-video-comments`, that
//! fetches the public comments of a YouTube video and packages them into a
//! Markdown report ranked by likes, followed by analysis instructions for a
//! downstream language model.
//!
//! # Architecture
//!
//! - `youtube` - Video ID extraction and paginated comment fetching
//! - `analysis` - Argument validation, ranking, and report assembly
//! - `mcp` - JSON-RPC 2.0 server over stdio
//! - `config` - Settings and the analysis prompt
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use yt_comment_analyzer::analysis::CommentAnalyzer;
//! use yt_comment_analyzer::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let analyzer = CommentAnalyzer::from_settings(&settings)?;
//!
//!     let args = serde_json::json!({
//!         "videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!         "maxComments": 200,
//!     });
//!     let result = analyzer.analyze(Some(&args)).await;
//!     println!("{}", result.text_content());
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod youtube;

pub use error::{AnalyzerError, Result};

//! The `analyze-video-comments` tool.
//!
//! Turns one set of tool arguments into exactly one terminal response:
//! validation failure, unrecognized URL, fetch failure, no comments, or
//! the full report.

use super::format::format_comments;
use super::report::AnalysisReport;
use super::request::AnalysisRequest;
use crate::config::{Prompts, Settings};
use crate::error::{AnalyzerError, Result};
use crate::mcp::ToolCallResult;
use crate::youtube::{extract_video_id, CommentFetcher};
use serde_json::Value;
use tracing::{info, warn};

/// Tool name exposed over MCP.
pub const TOOL_NAME: &str = "analyze-video-comments";

/// Reply when the URL holds no recognizable video ID.
pub const INVALID_URL_MESSAGE: &str = "有効なYouTube動画URLを指定してください。";

/// Reply when the video has no comments, or comments are disabled.
pub const NO_COMMENTS_MESSAGE: &str =
    "この動画にはコメントがありません、またはコメントが無効になっています。";

/// Non-error outcomes of an analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Report(String),
    NoComments,
}

/// Fetches, ranks and packages comments for one video per call.
#[derive(Clone)]
pub struct CommentAnalyzer {
    fetcher: CommentFetcher,
    prompts: Prompts,
}

impl CommentAnalyzer {
    pub fn new(fetcher: CommentFetcher, prompts: Prompts) -> Self {
        Self { fetcher, prompts }
    }

    /// Build an analyzer backed by the YouTube Data API.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let fetcher = CommentFetcher::from_settings(&settings.youtube)?;
        let prompts = Prompts::load(settings.prompts.custom_file.as_deref())?;
        Ok(Self::new(fetcher, prompts))
    }

    /// Run the tool and wrap the outcome in a tool result.
    pub async fn analyze(&self, arguments: Option<&Value>) -> ToolCallResult {
        match self.run(arguments).await {
            Ok(AnalysisOutcome::Report(text)) => ToolCallResult::text(text),
            Ok(AnalysisOutcome::NoComments) => ToolCallResult::text(NO_COMMENTS_MESSAGE.to_string()),
            Err(e) => {
                warn!("Comment analysis failed: {}", e);
                ToolCallResult::error(error_message(&e))
            }
        }
    }

    /// Validate, extract, fetch and format.
    pub async fn run(&self, arguments: Option<&Value>) -> Result<AnalysisOutcome> {
        let request = AnalysisRequest::from_arguments(arguments)?;

        let video_id = extract_video_id(&request.video_url)
            .ok_or_else(|| AnalyzerError::VideoNotFound(request.video_url.clone()))?;

        info!(video_id = %video_id, max_comments = request.max_comments, "Analyzing comments");
        let comments = self.fetcher.fetch(&video_id, request.max_comments).await?;
        if comments.is_empty() {
            return Ok(AnalysisOutcome::NoComments);
        }

        let report = AnalysisReport {
            video_url: &request.video_url,
            video_id: &video_id,
            comments: format_comments(&comments),
            instructions: &self.prompts.analysis,
        };
        Ok(AnalysisOutcome::Report(report.render()))
    }
}

/// User-facing text for a failed analysis.
fn error_message(error: &AnalyzerError) -> String {
    match error {
        AnalyzerError::Validation(_) => error.to_string(),
        AnalyzerError::VideoNotFound(_) => INVALID_URL_MESSAGE.to_string(),
        other => format!("エラーが発生しました: {}", other),
    }
}

//! YouTube Data API client for comment threads.

use crate::config::YoutubeSettings;
use crate::error::{AnalyzerError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Parameters for one `commentThreads.list` page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub video_id: &'a str,
    /// Number of threads to request (1-100).
    pub max_results: u32,
    /// Continuation token from the previous page.
    pub page_token: Option<&'a str>,
}

/// One page of `commentThreads.list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadPage {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: Comment,
    #[serde(default)]
    pub total_reply_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
    #[serde(default)]
    pub author_display_name: String,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub published_at: String,
}

/// Error body returned by Google APIs.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Source of comment thread pages.
#[async_trait]
pub trait CommentThreadsApi: Send + Sync {
    /// Fetch a single page of top-level comment threads.
    async fn list_comment_threads(
        &self,
        api_key: &str,
        request: &PageRequest<'_>,
    ) -> Result<CommentThreadPage>;
}

/// HTTP client for the YouTube Data API v3.
pub struct YoutubeDataApi {
    client: reqwest::Client,
    base_url: String,
}

impl YoutubeDataApi {
    /// Create a client from YouTube settings.
    pub fn new(settings: &YoutubeSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CommentThreadsApi for YoutubeDataApi {
    #[instrument(skip(self, api_key, request), fields(video_id = request.video_id, max_results = request.max_results))]
    async fn list_comment_threads(
        &self,
        api_key: &str,
        request: &PageRequest<'_>,
    ) -> Result<CommentThreadPage> {
        let url = format!("{}/commentThreads", self.base_url);
        let max_results = request.max_results.to_string();

        let mut query = vec![
            ("part", "snippet"),
            ("videoId", request.video_id),
            ("maxResults", max_results.as_str()),
            ("order", "relevance"),
            ("textFormat", "plainText"),
            ("key", api_key),
        ];
        if let Some(token) = request.page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AnalyzerError::Upstream(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalyzerError::Upstream(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(AnalyzerError::Upstream(describe_error(status, &body)));
        }

        let page: CommentThreadPage = serde_json::from_str(&body).map_err(|e| {
            AnalyzerError::Upstream(format!("Failed to parse commentThreads response: {}", e))
        })?;

        debug!(
            items = page.items.len(),
            has_next = page.next_page_token.is_some(),
            "Received comment page"
        );
        Ok(page)
    }
}

/// Build a readable message from a non-success response.
fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("HTTP {}: {}", status, parsed.error.message),
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}

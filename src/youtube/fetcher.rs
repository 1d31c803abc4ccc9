//! Paginated comment fetching.

use super::api::{CommentThread, CommentThreadsApi, PageRequest, YoutubeDataApi};
use super::VideoId;
use crate::config::YoutubeSettings;
use crate::error::{AnalyzerError, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Largest page the commentThreads endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One top-level comment, as handed to the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub text: String,
    pub author: String,
    pub like_count: u64,
    pub reply_count: u64,
    /// ISO 8601 timestamp as returned by the API.
    pub published_at: String,
}

impl From<CommentThread> for CommentRecord {
    fn from(thread: CommentThread) -> Self {
        let reply_count = thread.snippet.total_reply_count;
        let snippet = thread.snippet.top_level_comment.snippet;
        Self {
            text: snippet.text_display,
            author: snippet.author_display_name,
            like_count: snippet.like_count,
            reply_count,
            published_at: snippet.published_at,
        }
    }
}

/// Where the API key comes from.
///
/// The environment variable is checked first, then the key from the
/// config file. Resolved on every fetch so a missing key only fails the
/// call that needs it.
#[derive(Debug, Clone)]
pub struct ApiKeySource {
    env_var: String,
    configured: Option<String>,
}

impl ApiKeySource {
    pub fn new(env_var: impl Into<String>, configured: Option<String>) -> Self {
        Self {
            env_var: env_var.into(),
            configured,
        }
    }

    pub fn from_settings(settings: &YoutubeSettings) -> Self {
        Self::new(settings.api_key_env.clone(), settings.api_key.clone())
    }

    /// Resolve the key, or fail with `MissingCredential` naming the variable.
    pub fn resolve(&self) -> Result<String> {
        std::env::var(&self.env_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.configured
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
            .ok_or_else(|| AnalyzerError::MissingCredential(self.env_var.clone()))
    }
}

/// Collects top-level comments for a video, page by page.
#[derive(Clone)]
pub struct CommentFetcher {
    api: Arc<dyn CommentThreadsApi>,
    api_key: ApiKeySource,
}

impl CommentFetcher {
    pub fn new(api: Arc<dyn CommentThreadsApi>, api_key: ApiKeySource) -> Self {
        Self { api, api_key }
    }

    /// Create a fetcher backed by the YouTube Data API.
    pub fn from_settings(settings: &YoutubeSettings) -> Result<Self> {
        let api = YoutubeDataApi::new(settings)?;
        Ok(Self::new(Arc::new(api), ApiKeySource::from_settings(settings)))
    }

    /// Fetch up to `max_results` comments, in the order the API returns them.
    ///
    /// Stops once `max_results` comments are collected or the API reports no
    /// further pages. The first failing page aborts the whole fetch. A
    /// `max_results` of zero or less requests nothing.
    #[instrument(skip(self, video_id), fields(video_id = %video_id))]
    pub async fn fetch(&self, video_id: &VideoId, max_results: i64) -> Result<Vec<CommentRecord>> {
        let api_key = self.api_key.resolve()?;
        let max_results = usize::try_from(max_results).unwrap_or(0);

        let mut comments: Vec<CommentRecord> = Vec::new();
        let mut page_token: Option<String> = None;

        while comments.len() < max_results {
            let remaining = max_results - comments.len();
            let request = PageRequest {
                video_id: video_id.as_str(),
                max_results: remaining.min(MAX_PAGE_SIZE as usize) as u32,
                page_token: page_token.as_deref(),
            };

            let page = self.api.list_comment_threads(&api_key, &request).await?;
            debug!(
                requested = request.max_results,
                received = page.items.len(),
                "Fetched comment page"
            );

            comments.extend(page.items.into_iter().map(CommentRecord::from));

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        comments.truncate(max_results);
        info!(count = comments.len(), "Collected comments");
        Ok(comments)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::youtube::api::{
        Comment, CommentSnippet, CommentThreadPage, CommentThreadSnippet,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory comment source serving `total` comments, with like counts
    /// equal to their position.
    pub(crate) struct FakeApi {
        pub total: usize,
        pub fail_on_page: Option<usize>,
        /// Items served beyond what each page asked for.
        pub overfill: usize,
        pub requests: Mutex<Vec<(u32, Option<String>)>>,
    }

    impl FakeApi {
        pub fn with_comments(total: usize) -> Self {
            Self {
                total,
                fail_on_page: None,
                overfill: 0,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn page_sizes(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|(n, _)| *n).collect()
        }
    }

    pub(crate) fn thread(index: usize) -> CommentThread {
        CommentThread {
            snippet: CommentThreadSnippet {
                top_level_comment: Comment {
                    snippet: CommentSnippet {
                        text_display: format!("comment {}", index),
                        author_display_name: format!("user{}", index),
                        like_count: index as u64,
                        published_at: "2024-01-01T00:00:00Z".to_string(),
                    },
                },
                total_reply_count: 1,
            },
        }
    }

    #[async_trait]
    impl CommentThreadsApi for FakeApi {
        async fn list_comment_threads(
            &self,
            _api_key: &str,
            request: &PageRequest<'_>,
        ) -> Result<CommentThreadPage> {
            let page_index = {
                let mut requests = self.requests.lock().unwrap();
                requests.push((request.max_results, request.page_token.map(String::from)));
                requests.len() - 1
            };

            if self.fail_on_page == Some(page_index) {
                return Err(AnalyzerError::Upstream("HTTP 500: backend error".to_string()));
            }

            let start: usize = request.page_token.map_or(0, |t| t.parse().unwrap());
            let end = (start + request.max_results as usize + self.overfill).min(self.total);
            let items = (start..end).map(thread).collect();
            let next_page_token = (end < self.total).then(|| end.to_string());

            Ok(CommentThreadPage {
                items,
                next_page_token,
            })
        }
    }

    fn fetcher(api: Arc<FakeApi>) -> CommentFetcher {
        CommentFetcher::new(api, ApiKeySource::new("YTCA_TEST_UNSET_KEY", Some("test-key".into())))
    }

    fn video() -> VideoId {
        VideoId::parse("abc123").unwrap()
    }

    #[tokio::test]
    async fn test_fetch_pages_up_to_max() {
        let api = Arc::new(FakeApi::with_comments(1000));
        let comments = fetcher(api.clone()).fetch(&video(), 250).await.unwrap();

        assert_eq!(comments.len(), 250);
        assert_eq!(api.page_sizes(), vec![100, 100, 50]);
        assert_eq!(comments[0].author, "user0");
        assert_eq!(comments[249].author, "user249");
    }

    #[tokio::test]
    async fn test_fetch_passes_continuation_tokens() {
        let api = Arc::new(FakeApi::with_comments(1000));
        fetcher(api.clone()).fetch(&video(), 250).await.unwrap();

        let tokens: Vec<Option<String>> = api
            .requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, t)| t.clone())
            .collect();
        assert_eq!(tokens, vec![None, Some("100".into()), Some("200".into())]);
    }

    #[tokio::test]
    async fn test_fetch_stops_without_token() {
        let api = Arc::new(FakeApi::with_comments(130));
        let comments = fetcher(api.clone()).fetch(&video(), 1000).await.unwrap();

        assert_eq!(comments.len(), 130);
        assert_eq!(api.page_sizes(), vec![100, 100]);
    }

    #[tokio::test]
    async fn test_fetch_empty_video() {
        let api = Arc::new(FakeApi::with_comments(0));
        let comments = fetcher(api.clone()).fetch(&video(), 5).await.unwrap();

        assert!(comments.is_empty());
        assert_eq!(api.page_sizes(), vec![5]);
    }

    #[tokio::test]
    async fn test_fetch_truncates_oversized_pages() {
        let api = Arc::new(FakeApi {
            overfill: 7,
            ..FakeApi::with_comments(1000)
        });
        let comments = fetcher(api.clone()).fetch(&video(), 150).await.unwrap();

        assert_eq!(api.page_sizes(), vec![100, 43]);
        assert_eq!(comments.len(), 150);
        assert_eq!(comments[149].author, "user149");
    }

    #[tokio::test]
    async fn test_fetch_non_positive_max_makes_no_requests() {
        for max in [0, -5] {
            let api = Arc::new(FakeApi::with_comments(10));
            let comments = fetcher(api.clone()).fetch(&video(), max).await.unwrap();

            assert!(comments.is_empty());
            assert!(api.page_sizes().is_empty());
        }
    }

    #[tokio::test]
    async fn test_fetch_aborts_on_page_error() {
        let api = Arc::new(FakeApi {
            fail_on_page: Some(1),
            ..FakeApi::with_comments(1000)
        });
        let err = fetcher(api.clone()).fetch(&video(), 300).await.unwrap_err();

        assert!(matches!(err, AnalyzerError::Upstream(ref m) if m.contains("backend error")));
        assert_eq!(api.page_sizes().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_without_key_makes_no_requests() {
        let api = Arc::new(FakeApi::with_comments(10));
        let fetcher = CommentFetcher::new(api.clone(), ApiKeySource::new("YTCA_TEST_UNSET_KEY", None));

        let err = fetcher.fetch(&video(), 10).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingCredential(ref v) if v == "YTCA_TEST_UNSET_KEY"));
        assert!(api.page_sizes().is_empty());
    }

    #[test]
    fn test_blank_configured_key_is_missing() {
        let source = ApiKeySource::new("YTCA_TEST_UNSET_KEY", Some("  ".into()));
        assert!(source.resolve().is_err());
    }

    #[test]
    fn test_record_from_thread() {
        let record = CommentRecord::from(thread(7));
        assert_eq!(record.text, "comment 7");
        assert_eq!(record.like_count, 7);
        assert_eq!(record.reply_count, 1);
    }
}

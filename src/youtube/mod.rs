//! YouTube integration: video ID extraction and comment fetching.

pub mod api;
mod fetcher;
mod video_id;

pub use api::{CommentThreadsApi, YoutubeDataApi};
pub use fetcher::{ApiKeySource, CommentFetcher, CommentRecord, MAX_PAGE_SIZE};
pub use video_id::{extract_video_id, VideoId};

#[cfg(test)]
pub(crate) use fetcher::tests::FakeApi;

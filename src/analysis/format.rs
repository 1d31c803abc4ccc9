//! Ranking and rendering of fetched comments.

use crate::youtube::CommentRecord;

/// Aggregate figures over a set of comments.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentStats {
    pub total_comments: usize,
    pub total_likes: u64,
    pub total_replies: u64,
    /// Mean likes per comment, 0 for an empty set.
    pub average_likes: f64,
}

impl CommentStats {
    pub fn from_comments(comments: &[CommentRecord]) -> Self {
        let total_likes: u64 = comments.iter().map(|c| c.like_count).sum();
        let total_replies: u64 = comments.iter().map(|c| c.reply_count).sum();
        let average_likes = if comments.is_empty() {
            0.0
        } else {
            total_likes as f64 / comments.len() as f64
        };

        Self {
            total_comments: comments.len(),
            total_likes,
            total_replies,
            average_likes,
        }
    }

    /// Average likes with one decimal place.
    pub fn average_likes_display(&self) -> String {
        format!("{:.1}", self.average_likes)
    }
}

/// Ranked comment text plus the statistics it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedComments {
    pub text: String,
    pub stats: CommentStats,
}

/// Order comments by like count, most liked first.
///
/// The sort is stable: comments with equal likes keep their fetch order.
pub fn rank_by_likes(comments: &[CommentRecord]) -> Vec<&CommentRecord> {
    let mut ranked: Vec<&CommentRecord> = comments.iter().collect();
    ranked.sort_by(|a, b| b.like_count.cmp(&a.like_count));
    ranked
}

/// Render one comment as a numbered block.
fn render_comment(rank: usize, comment: &CommentRecord) -> String {
    format!(
        "【コメント {}】\n投稿者: {}\n内容: {}\n👍 いいね数: {}\n💬 返信数: {}\n📅 投稿日時: {}\n",
        rank,
        comment.author,
        comment.text,
        comment.like_count,
        comment.reply_count,
        comment.published_at
    )
}

/// Rank comments by likes and render them, separated by blank lines.
pub fn format_comments(comments: &[CommentRecord]) -> FormattedComments {
    let blocks: Vec<String> = rank_by_likes(comments)
        .into_iter()
        .enumerate()
        .map(|(i, comment)| render_comment(i + 1, comment))
        .collect();

    FormattedComments {
        text: blocks.join("\n"),
        stats: CommentStats::from_comments(comments),
    }
}

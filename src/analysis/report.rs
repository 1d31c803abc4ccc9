//! Final report handed back to the caller.

use super::format::FormattedComments;
use crate::youtube::VideoId;

/// Everything the downstream model needs: metadata, ranked comments and
/// the analysis instructions.
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub video_url: &'a str,
    pub video_id: &'a VideoId,
    pub comments: FormattedComments,
    pub instructions: &'a str,
}

impl AnalysisReport<'_> {
    /// Render the report as Markdown.
    pub fn render(&self) -> String {
        let stats = &self.comments.stats;
        format!(
            "# YouTube動画コメントデータ

## 📊 基本情報
- **動画URL**: {url}
- **動画ID**: `{id}`
- **取得コメント数**: {count}件
- **合計いいね数**: {likes}
- **合計返信数**: {replies}
- **平均いいね数**: {average}

---

## 📝 コメント一覧（いいね数順）

{comments}

---

## 📋 分析指示

{instructions}
",
            url = self.video_url,
            id = self.video_id,
            count = stats.total_comments,
            likes = stats.total_likes,
            replies = stats.total_replies,
            average = stats.average_likes_display(),
            comments = self.comments.text,
            instructions = self.instructions,
        )
    }
}

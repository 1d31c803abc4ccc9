//! Video identifier extraction from YouTube URLs.

use regex::Regex;
use std::sync::LazyLock;

/// URL shapes carrying a video ID, in priority order.
static VIDEO_URL_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?v=([a-zA-Z0-9_-]+)",
        r"youtube\.com/embed/([a-zA-Z0-9_-]+)",
        r"youtu\.be/([a-zA-Z0-9_-]+)",
        r"youtube\.com/v/([a-zA-Z0-9_-]+)",
    ]
    .map(|pattern| Regex::new(pattern).expect("Invalid regex"))
});

/// A validated YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Accept a bare identifier. Returns `None` if it is empty or contains
    /// characters outside `[a-zA-Z0-9_-]`.
    pub fn parse(id: &str) -> Option<Self> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video ID from a YouTube URL.
///
/// Recognizes watch, embed, `youtu.be` and legacy `/v/` URLs. The first
/// matching shape wins; `None` means the input holds no recognizable ID.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VIDEO_URL_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .and_then(|m| VideoId::parse(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        extract_video_id(url).map(|v| v.as_str().to_string())
    }

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(id("https://youtu.be/xyz_9"), Some("xyz_9".to_string()));
        assert_eq!(
            id("http://youtube.com/v/a-b_c"),
            Some("a-b_c".to_string())
        );
    }

    #[test]
    fn test_id_stops_at_url_syntax() {
        assert_eq!(
            id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            id("https://youtu.be/dQw4w9WgXcQ?si=share"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_takes_priority() {
        // Both the watch and youtu.be shapes occur; watch is tried first.
        assert_eq!(
            id("https://youtu.be/short1 https://www.youtube.com/watch?v=long22"),
            Some("long22".to_string())
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(id("not a url"), None);
        assert_eq!(id(""), None);
        assert_eq!(id("https://www.youtube.com/watch?list=PL123"), None);
        assert_eq!(id("https://vimeo.com/12345"), None);
    }

    #[test]
    fn test_parse_rejects_url_syntax() {
        assert!(VideoId::parse("abc123").is_some());
        assert!(VideoId::parse("").is_none());
        assert!(VideoId::parse("abc?v=1").is_none());
        assert!(VideoId::parse("a/b").is_none());
    }
}

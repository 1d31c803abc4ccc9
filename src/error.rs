//! Error types for the comment analyzer.

use thiserror::Error;

/// Library-level error type.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("入力検証エラー: {0}")]
    Validation(#[from] crate::analysis::ValidationErrors),

    #[error("Video not found in URL: {0}")]
    VideoNotFound(String),

    #[error("{0}環境変数が設定されていません")]
    MissingCredential(String),

    #[error("コメントの取得中にエラーが発生しました: {0}")]
    Upstream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

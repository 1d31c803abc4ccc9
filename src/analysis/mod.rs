//! Comment analysis: argument validation, ranking, and report assembly.

mod analyzer;
mod format;
mod report;
mod request;

pub use analyzer::{
    AnalysisOutcome, CommentAnalyzer, INVALID_URL_MESSAGE, NO_COMMENTS_MESSAGE, TOOL_NAME,
};
pub use format::{format_comments, rank_by_likes, CommentStats, FormattedComments};
pub use report::AnalysisReport;
pub use request::{AnalysisRequest, FieldError, ValidationErrors, DEFAULT_MAX_COMMENTS};

//! Analyze command - run the tool once from the command line.

use crate::analysis::CommentAnalyzer;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;
use serde_json::json;

/// Run the analysis for a single video and print the report to stdout.
pub async fn run_analyze(url: &str, max_comments: Option<i64>, settings: Settings) -> Result<()> {
    let analyzer = CommentAnalyzer::from_settings(&settings)?;

    let mut arguments = json!({ "videoUrl": url });
    if let Some(max) = max_comments {
        arguments["maxComments"] = json!(max);
    }

    Output::info(&format!("Fetching comments for {}", url));
    let result = analyzer.analyze(Some(&arguments)).await;

    if result.is_error {
        Output::error(&result.text_content());
        anyhow::bail!("analysis failed");
    }

    println!("{}", result.text_content());
    Ok(())
}

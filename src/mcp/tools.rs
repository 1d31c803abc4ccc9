//! MCP tool definitions.

use super::protocol::{Tool, ToolAnnotations};
use crate::analysis::{DEFAULT_MAX_COMMENTS, TOOL_NAME};
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![Tool {
        name: TOOL_NAME.to_string(),
        title: Some("動画コメント分析".to_string()),
        description: "YouTube動画のコメントを取得して、エンゲージメント、視聴者の意見、改善点などを詳細に分析します。"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "videoUrl": {
                    "type": "string",
                    "description": "YouTube動画のURL（例: https://www.youtube.com/watch?v=VIDEO_ID）"
                },
                "maxComments": {
                    "type": "integer",
                    "description": "取得する最大コメント数（デフォルト: 1000、可能な限り多く取得）",
                    "default": DEFAULT_MAX_COMMENTS
                }
            },
            "required": ["videoUrl"],
            "additionalProperties": false
        }),
        annotations: Some(ToolAnnotations {
            read_only_hint: true,
            destructive_hint: false,
            open_world_hint: true,
        }),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_descriptor() {
        let tools = get_tools();
        assert_eq!(tools.len(), 1);

        let tool = serde_json::to_value(&tools[0]).unwrap();
        assert_eq!(tool["name"], "analyze-video-comments");
        assert_eq!(tool["inputSchema"]["required"], json!(["videoUrl"]));
        assert_eq!(tool["inputSchema"]["additionalProperties"], json!(false));
        assert_eq!(tool["inputSchema"]["properties"]["maxComments"]["default"], json!(1000));
        assert!(tool["inputSchema"]["properties"]["maxComments"].get("minimum").is_none());
        assert_eq!(tool["annotations"]["readOnlyHint"], json!(true));
        assert_eq!(tool["annotations"]["openWorldHint"], json!(true));
    }
}

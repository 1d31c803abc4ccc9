//! Prompt templates for the comment analyzer.
//!
//! The analysis instructions can be replaced by pointing `prompts.custom_file`
//! at a TOML file with an `analysis` key.

use serde::{Deserialize, Serialize};

/// Collection of prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompts {
    /// Instructions appended verbatim to every successful report.
    pub analysis: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            analysis: r#"

以下のルールに則って共有したcsvファイルにあるコメントを分析して下さい。

分析項目(1)

・共感性の高いコメントの抽出
共感性が高い = いいねの数が多い

・返信の数が多いコメントの抽出

分析項目(2)
・動画への要望
・視聴者の不満
・動画への指摘
・改善を希望する声
・批判的な意見

分析項目(3)
動画の内容について肯定的な意見や否定的な意見を客観的にまとめて、今後質の高い動画作りをする上で維持するポイントをまとめて

分析項目(4)
分析項目1〜3を総合的に分析し、仮にこの動画を作り直すことを前提として、ミスをなくし、修正すべきポイントと改善すべきポイントをまとめること

**重要**: 全ての分析結果は必ず日本語で記載してください。

"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts, overriding the defaults with a custom file when given.
    pub fn load(custom_file: Option<&str>) -> crate::error::Result<Self> {
        let Some(file) = custom_file else {
            return Ok(Prompts::default());
        };

        let path = super::Settings::expand_path(file);
        if !path.exists() {
            return Err(crate::error::AnalyzerError::Config(format!(
                "Prompt file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(&path)?;
        let prompts: Prompts = toml::from_str(&content)?;
        Ok(prompts)
    }
}

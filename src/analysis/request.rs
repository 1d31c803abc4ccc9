//! Validated input for the comment analysis tool.

use serde_json::Value;

/// Number of comments fetched when the caller does not say otherwise.
pub const DEFAULT_MAX_COMMENTS: i64 = 1000;

const VIDEO_URL: &str = "videoUrl";
const MAX_COMMENTS: &str = "maxComments";

/// Arguments of one `analyze-video-comments` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub video_url: String,
    /// Upper bound on fetched comments. Zero or less fetches nothing.
    pub max_comments: i64,
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in a set of tool arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl AnalysisRequest {
    /// Validate raw tool arguments.
    ///
    /// Missing arguments are treated as an empty object. All errors are
    /// collected rather than stopping at the first one.
    pub fn from_arguments(arguments: Option<&Value>) -> Result<Self, ValidationErrors> {
        let empty = serde_json::Map::new();
        let object = match arguments {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(ValidationErrors(vec![FieldError::new(
                    "arguments",
                    "Input should be an object",
                )]))
            }
        };

        let mut errors = Vec::new();

        let video_url = match object.get(VIDEO_URL) {
            None => {
                errors.push(FieldError::new(VIDEO_URL, "Field required"));
                None
            }
            Some(Value::String(url)) => Some(url.clone()),
            Some(_) => {
                errors.push(FieldError::new(VIDEO_URL, "Input should be a valid string"));
                None
            }
        };

        let max_comments = match object.get(MAX_COMMENTS) {
            None => Some(DEFAULT_MAX_COMMENTS),
            Some(value) => match parse_max_comments(value) {
                Ok(n) => Some(n),
                Err(message) => {
                    errors.push(FieldError::new(MAX_COMMENTS, message));
                    None
                }
            },
        };

        for key in object.keys() {
            if key != VIDEO_URL && key != MAX_COMMENTS {
                errors.push(FieldError::new(key, "Extra inputs are not permitted"));
            }
        }

        match (video_url, max_comments) {
            (Some(video_url), Some(max_comments)) if errors.is_empty() => Ok(Self {
                video_url,
                max_comments,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }
}

/// Accept any JSON integer, including whole-number floats. Values past the
/// `i64` range saturate.
fn parse_max_comments(value: &Value) -> Result<i64, String> {
    let Value::Number(number) = value else {
        return Err("Input should be a valid integer".to_string());
    };

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64().filter(|f| f.fract() == 0.0) {
        // `as` saturates at the i64 bounds.
        Some(f) => Ok(f as i64),
        None => Err("Input should be a valid integer".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_max_comments() {
        let args = json!({"videoUrl": "https://youtu.be/abc"});
        let request = AnalysisRequest::from_arguments(Some(&args)).unwrap();
        assert_eq!(request.video_url, "https://youtu.be/abc");
        assert_eq!(request.max_comments, DEFAULT_MAX_COMMENTS);
    }

    #[test]
    fn test_explicit_max_comments() {
        let args = json!({"videoUrl": "https://youtu.be/abc", "maxComments": 5});
        let request = AnalysisRequest::from_arguments(Some(&args)).unwrap();
        assert_eq!(request.max_comments, 5);

        let args = json!({"videoUrl": "https://youtu.be/abc", "maxComments": 20.0});
        let request = AnalysisRequest::from_arguments(Some(&args)).unwrap();
        assert_eq!(request.max_comments, 20);
    }

    #[test]
    fn test_missing_video_url() {
        let errors = AnalysisRequest::from_arguments(None).unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.to_string(), "videoUrl: Field required");
    }

    #[test]
    fn test_collects_all_errors() {
        let args = json!({"videoUrl": 42, "maxComments": "many", "limit": 3});
        let errors = AnalysisRequest::from_arguments(Some(&args)).unwrap_err();

        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["videoUrl", "maxComments", "limit"]);
        assert!(errors.to_string().contains("limit: Extra inputs are not permitted"));
    }

    #[test]
    fn test_unknown_field_rejected_even_when_valid() {
        let args = json!({"videoUrl": "https://youtu.be/abc", "language": "en"});
        let errors = AnalysisRequest::from_arguments(Some(&args)).unwrap_err();
        assert_eq!(errors.errors()[0].field, "language");
    }

    #[test]
    fn test_accepts_any_integer_max_comments() {
        for (given, expected) in [
            (json!(0), 0),
            (json!(-5), -5),
            (json!(5_000_000_000u64), 5_000_000_000),
            (json!(u64::MAX), i64::MAX),
        ] {
            let args = json!({"videoUrl": "https://youtu.be/abc", "maxComments": given});
            let request = AnalysisRequest::from_arguments(Some(&args)).unwrap();
            assert_eq!(request.max_comments, expected);
        }
    }

    #[test]
    fn test_rejects_bad_max_comments() {
        for bad in [json!(2.5), json!(null), json!(true), json!("10")] {
            let args = json!({"videoUrl": "https://youtu.be/abc", "maxComments": bad.clone()});
            let errors = AnalysisRequest::from_arguments(Some(&args)).unwrap_err();
            assert_eq!(errors.errors()[0].field, "maxComments", "accepted {}", bad);
        }
    }

    #[test]
    fn test_rejects_non_object() {
        let args = json!(["https://youtu.be/abc"]);
        let errors = AnalysisRequest::from_arguments(Some(&args)).unwrap_err();
        assert_eq!(errors.errors()[0].field, "arguments");
    }
}

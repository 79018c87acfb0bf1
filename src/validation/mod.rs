use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single failed field check, reported to the client in the `errors` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
    pub location: String,
}

impl FieldError {
    pub fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
            location: "body".to_string(),
        }
    }
}

/// Request body shared by post creation and commenting
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextInput {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

/// Null or non-string `text` reads as empty so it fails field validation
/// instead of body parsing
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        _ => String::new(),
    })
}

/// Text must contain something other than whitespace
pub fn validate_text(text: &str) -> Result<(), Vec<FieldError>> {
    if text.trim().is_empty() {
        return Err(vec![FieldError::body("text", "Text is required")]);
    }
    Ok(())
}

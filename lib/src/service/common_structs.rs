use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub const SUCCESS_STATUS: &str = "success";


// { "status": "success", "mood": "happy" }
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MoodResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// { "status": "success", "suggestions": ["dance", "sing"] }
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SuggestionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    // kept loose: anything that is not an array becomes an empty list
    #[serde(default)]
    pub suggestions: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn is_success(status: &Option<String>) -> bool {
    status.as_deref() == Some(SUCCESS_STATUS)
}

impl SuggestionResponse {
    /// The suggestion list as displayed.
    ///
    /// Strings are kept verbatim and in order; numbers and booleans are shown
    /// as text. A payload that is not an array yields an empty list.
    pub fn suggestion_list(self) -> Vec<String> {
        let items = match self.suggestions {
            Value::Array(items) => items,
            other => {
                debug!(payload = %other, "Suggestions payload is not an array, using an empty list");
                return vec![];
            }
        };

        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                Value::Bool(flag) => Some(flag.to_string()),
                other => {
                    debug!(item = %other, "Skipping suggestion that is not text");
                    None
                }
            })
            .collect()
    }
}

// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompt::MealPreferences;

/// Inbound body of `POST /api/chat`. Both fields are optional on the wire;
/// validation happens in the relay so that malformed bodies fail the same way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub preferences: Option<MealPreferences>,
}

impl ChatRequest {
    /// Lenient decode: anything that is not a JSON object reads as `{}`,
    /// a non-string `message` reads as absent and bad `preferences` are dropped.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let Value::Object(fields) = value else {
            return Self::default();
        };

        let message = fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let preferences = fields
            .get("preferences")
            .cloned()
            .and_then(|v| serde_json::from_value::<MealPreferences>(v).ok());

        Self {
            message,
            preferences,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

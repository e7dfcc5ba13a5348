// src/services/upstream.rs
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Failures raised by a completion backend. The display text is what gets classified.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("upstream returned no choices")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// A chat-completion backend: role-tagged messages in, generated text out.
///
/// Implementations must be shareable across concurrent requests; the
/// credential is passed on every call so the handle itself holds no secrets.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    async fn complete(&self, api_key: &str, messages: &[ChatMessage]) -> Result<String, UpstreamError>;
}

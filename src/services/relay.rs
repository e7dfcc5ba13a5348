// src/services/relay.rs
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    prompt::{SYSTEM_PROMPT, user_content},
    rules::classify,
    services::upstream::{ChatMessage, CompletionApi},
};

pub const MISSING_MESSAGE: &str = "Missing required field 'message'";

/// The one implementation of the chat endpoint. Every hosting adapter goes through `relay`.
#[derive(Clone)]
pub struct ChatRelay {
    api_key: Option<String>,
    upstream: Arc<dyn CompletionApi>,
}

impl std::fmt::Debug for ChatRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRelay")
            .field("configured", &self.api_key.is_some())
            .finish()
    }
}

impl ChatRelay {
    pub fn new(api_key: Option<String>, upstream: Arc<dyn CompletionApi>) -> Self {
        Self { api_key, upstream }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn relay(&self, body: &[u8]) -> Result<ChatResponse, AppError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("OPENAI_API_KEY is not configured");
            return Err(AppError::MissingCredential);
        };

        let request = ChatRequest::from_body(body);
        let trimmed = request.message.as_deref().map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            warn!("rejecting chat request without a message");
            return Err(AppError::BadRequest(MISSING_MESSAGE.to_string()));
        }

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_content(trimmed, request.preferences.as_ref())),
        ];

        match self.upstream.complete(api_key, &messages).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), "chat reply generated");
                Ok(ChatResponse { reply })
            }
            Err(e) => {
                let raw = e.to_string();
                error!(error = %raw, "completion call failed");
                Err(AppError::Upstream(classify(&raw)))
            }
        }
    }
}

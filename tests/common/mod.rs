#![allow(dead_code)]

use async_trait::async_trait;
use meal_prep_relay::services::relay::ChatRelay;
use meal_prep_relay::services::upstream::{ChatMessage, CompletionApi, UpstreamError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic stand-in for the completion API that counts its calls.
pub struct MockCompletion {
    outcome: Result<String, String>,
    calls: AtomicUsize,
}

impl MockCompletion {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionApi for MockCompletion {
    async fn complete(&self, _api_key: &str, _messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(UpstreamError::Other)
    }
}

pub fn configured_relay(mock: Arc<MockCompletion>) -> ChatRelay {
    ChatRelay::new(Some("sk-test".to_string()), mock)
}

pub fn unconfigured_relay(mock: Arc<MockCompletion>) -> ChatRelay {
    ChatRelay::new(None, mock)
}

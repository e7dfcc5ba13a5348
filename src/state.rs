// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::openai::OpenAiClient;
use crate::services::relay::ChatRelay;
use crate::services::upstream::{CompletionApi, UpstreamError};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self { relay }
    }

    /// Wires the relay to the real OpenAI client.
    pub fn from_config(config: &RelayConfig) -> Result<Self, UpstreamError> {
        let client: Arc<dyn CompletionApi> = Arc::new(OpenAiClient::new(config)?);
        Ok(Self::new(ChatRelay::new(config.api_key.clone(), client)))
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

// src/config.rs
//! Relay configuration, read once at startup and handed to the relay.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct RelayConfig {
    /// OpenAI credential. `None` is reported per request, not at startup.
    pub api_key: Option<String>,
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Timeout applied by the upstream HTTP client.
    pub request_timeout: Duration,
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RelayConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable              | Default                      |
    /// |-----------------------|------------------------------|
    /// | `OPENAI_API_KEY`      | none                         |
    /// | `OPENAI_BASE_URL`     | `https://api.openai.com/v1`  |
    /// | `BIND_ADDR`           | `0.0.0.0:8000`               |
    /// | `OPENAI_TIMEOUT_SECS` | `60`                         |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup("OPENAI_API_KEY").and_then(non_blank),
            base_url: lookup("OPENAI_BASE_URL")
                .and_then(non_blank)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr: lookup("BIND_ADDR")
                .and_then(non_blank)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            request_timeout: Duration::from_secs(
                lookup("OPENAI_TIMEOUT_SECS")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = non_blank(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = RelayConfig::from_lookup(lookup_from(&[]));
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = RelayConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")]));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let cfg = RelayConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9999/v1/"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("OPENAI_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.base_url, "http://localhost:9999/v1");
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000");
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let cfg = RelayConfig::default().with_api_key("sk-secret");
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }
}

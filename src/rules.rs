// src/rules.rs
//! Maps raw upstream failure text to the message shown to the caller.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Drop the upstream text and use this message instead.
    Replace(&'static str),
    /// Keep the upstream text behind this prefix.
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Lowercase substrings; any one of them selects the rule.
    pub needles: &'static [&'static str],
    pub rewrite: Rewrite,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|needle| lowered.contains(needle))
    }

    fn apply(&self, original: &str) -> String {
        match self.rewrite {
            Rewrite::Replace(message) => message.to_string(),
            Rewrite::Prefix(prefix) => format!("{}{}", prefix, original),
        }
    }
}

pub const INVALID_KEY_MESSAGE: &str = "OpenAI API key is invalid or missing.";
pub const MODEL_ERROR_PREFIX: &str = "Model error: ";
pub const FALLBACK_PREFIX: &str = "Error calling OpenAI API: ";

/// Evaluated in order; the first match wins.
pub const UPSTREAM_RULES: &[Rule] = &[
    Rule {
        needles: &["api key", "authentication"],
        rewrite: Rewrite::Replace(INVALID_KEY_MESSAGE),
    },
    Rule {
        needles: &["model"],
        rewrite: Rewrite::Prefix(MODEL_ERROR_PREFIX),
    },
];

pub fn classify(message: &str) -> String {
    classify_with(UPSTREAM_RULES, message)
}

pub fn classify_with(rules: &[Rule], message: &str) -> String {
    let lowered = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.apply(message))
        .unwrap_or_else(|| format!("{}{}", FALLBACK_PREFIX, message))
}

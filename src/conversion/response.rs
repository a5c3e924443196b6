//! Wire types for whole and streamed chat-completion responses.
//!
//! Providers disagree on where token usage lives: the provider-neutral
//! top-level `usage` field, or Groq's `x_groq.usage` extension. Both are
//! modeled here; extraction order is decided in [`super::usage`].

use serde::Deserialize;

use super::usage::extract_usage;

/// Token-count telemetry attached to a completion or chunk.
///
/// Counters missing from the wire default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Groq's provider-specific response extension.
#[derive(Debug, Default, Deserialize)]
pub struct GroqExtension {
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// A complete, non-streamed chat-completion response.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
    #[serde(default)]
    pub x_groq: Option<GroqExtension>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Message,
}

#[derive(Debug, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// The generated text; absence is an empty string, never an error.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
    }

    /// The usage record, if either wire shape carries one.
    pub fn usage(&self) -> Option<TokenUsage> {
        extract_usage(self.x_groq.as_ref(), self.usage.as_ref())
    }
}

/// One incremental unit of a streamed completion response.
///
/// Any chunk may carry a text fragment, a usage record, both, or neither.
#[derive(Debug, Default, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
    #[serde(default)]
    pub x_groq: Option<GroqExtension>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub content: Option<String>,
}

impl StreamChunk {
    /// The chunk's text fragment; absence is an empty string.
    pub fn text(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
            .unwrap_or("")
    }

    /// The usage record, if either wire shape carries one.
    pub fn usage(&self) -> Option<TokenUsage> {
        extract_usage(self.x_groq.as_ref(), self.usage.as_ref())
    }
}

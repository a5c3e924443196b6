use anyhow::Result;
use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;
use std::pin::Pin;

use super::prompt::SYSTEM_PROMPT;
use super::response::{ChatCompletion, StreamChunk};
use super::sse::sse_to_chunk_stream;
use crate::error::Error;

/// Response length cap requested from the provider.
const MAX_TOKENS: u32 = 1024;

/// One completion request: the assembled prompt plus delivery options.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub stream: bool,
}

/// A completion response in one of its two delivery shapes.
///
/// Exactly one variant describes any response; the consumer dispatches on
/// it exhaustively.
pub enum Completion {
    /// The entire generated text arrived as a single object.
    Whole(Box<ChatCompletion>),
    /// Chunks arrive lazily; single-pass, not restartable.
    Streamed(Pin<Box<dyn Stream<Item = Result<StreamChunk>> + Send>>),
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream_options: Option<StreamOptions>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
struct StreamOptions {
    include_usage: bool,
}

/// Client for an OpenAI-compatible chat-completion endpoint.
///
/// Endpoint and credentials are injected at construction; nothing here
/// reads process-wide state.
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Executes the completion request.
    ///
    /// Returns [`Completion::Streamed`] when `request.stream` is set,
    /// otherwise [`Completion::Whole`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderCall`] (exit code 22) for connection
    /// failures, auth rejections, and non-success statuses. Failures after
    /// streaming has begun surface later as [`Error::StreamRead`] items.
    pub async fn create(&self, request: &CompletionRequest) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatCompletionBody {
            model: &request.model,
            messages: vec![
                RequestMessage {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                RequestMessage {
                    role: "user",
                    content: Cow::Borrowed(&request.prompt),
                },
            ],
            max_tokens: MAX_TOKENS,
            stream: request.stream,
            // Providers reject stream_options on non-streaming requests
            stream_options: request
                .stream
                .then_some(StreamOptions { include_usage: true }),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::ProviderCall(format!("failed to connect to '{url}': {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderCall(format!(
                "'{url}' responded with status {status}: {body}"
            ))
            .into());
        }

        if request.stream {
            let chunks = sse_to_chunk_stream(response.bytes_stream());
            Ok(Completion::Streamed(Box::pin(chunks)))
        } else {
            let completion: ChatCompletion = response
                .json()
                .await
                .map_err(|e| Error::ProviderCall(format!("failed to parse response: {e}")))?;
            Ok(Completion::Whole(Box::new(completion)))
        }
    }
}

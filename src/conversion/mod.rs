mod client;
mod prompt;
mod response;
mod sse;
mod usage;
mod writer;

pub use client::{Completion, CompletionClient, CompletionRequest};
pub use prompt::build_prompt;
pub use response::{
    ChatCompletion, Choice, ChunkChoice, Delta, GroqExtension, Message, StreamChunk, TokenUsage,
};
pub use usage::{UsageAccumulator, UsageReport};
pub use writer::{OutputSink, consume};

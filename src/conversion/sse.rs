//! Server-Sent Events decoding for streamed chat completions.
//!
//! Whole chunks are surfaced rather than bare text deltas: a chunk with no
//! content may still carry the usage record, typically on the last event
//! before `[DONE]`.

use anyhow::Result;
use bytes::Bytes;
use futures_util::Stream;

use super::response::StreamChunk;
use crate::error::Error;

/// Converts a raw SSE byte stream into a stream of completion chunks.
///
/// Handles buffering, line parsing, and SSE protocol details. `data: [DONE]`
/// ends the stream; non-data lines, comments, and unparseable payloads are
/// skipped. A transport-level failure yields one [`Error::StreamRead`] and
/// ends the stream immediately; it is never resumed.
pub fn sse_to_chunk_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<StreamChunk>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let bytes = match chunk_result {
                Ok(bytes) => bytes,
                Err(e) => {
                    yield Err(Error::StreamRead(e.to_string()).into());
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&bytes));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();
                let line = line.trim();

                if line == "data: [DONE]" {
                    return;
                }

                if let Some(chunk) = parse_sse_line(line) {
                    yield Ok(chunk);
                }
            }
        }
    }
}

/// Parses a single SSE line into a completion chunk.
///
/// Returns `None` for non-data lines, comments, and payloads that are not
/// valid chunk JSON. Chunks with empty content are still returned — they
/// may carry usage.
fn parse_sse_line(line: &str) -> Option<StreamChunk> {
    let json_str = line.strip_prefix("data: ")?;
    serde_json::from_str::<StreamChunk>(json_str).ok()
}

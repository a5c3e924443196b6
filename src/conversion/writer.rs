//! Completion consumption and output routing — the core of the tool.
//!
//! Drains a [`Completion`] into an [`OutputSink`], accumulating token usage
//! on the way. The two delivery shapes deliberately write differently:
//!
//! - a whole response **replaces** the output file in one write;
//! - a streamed response **appends** fragment by fragment, so a process
//!   tailing the sink sees output as it arrives.
//!
//! Invariant, regardless of sink and shape: the bytes written are the
//! concatenation of every text fragment in arrival order, followed by
//! exactly one trailing newline — unless the stream fails mid-drain, in
//! which case everything already written stays put and the newline is
//! never written.

use anyhow::Result;
use futures_util::StreamExt;
use std::io::{self, Write};
use std::path::PathBuf;

use super::client::Completion;
use super::usage::{UsageAccumulator, UsageReport};
use crate::error::Error;
use crate::fs;

/// Destination for generated text.
#[derive(Debug, Clone)]
pub enum OutputSink {
    /// A file path. Whole responses replace it; streamed fragments append.
    File(PathBuf),
    /// The process's stdout. Shared, append-only, never closed here.
    Stdout,
}

impl OutputSink {
    /// A file sink for the given path, or stdout when `None`.
    pub fn from_output_file(path: Option<String>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(PathBuf::from(p)))
    }

    /// Appends one fragment, flushing so the write is visible immediately.
    fn append(&self, fragment: &str) -> Result<()> {
        match self {
            Self::File(path) => fs::append(path, fragment).map_err(|e| self.write_error(e))?,
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(fragment.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| self.write_error(e))?;
            }
        }
        Ok(())
    }

    /// Writes the complete content in one event, replacing any previous
    /// file contents.
    fn replace(&self, content: &str) -> Result<()> {
        match self {
            Self::File(path) => fs::atomic_write(path, content).map_err(|e| self.write_error(e))?,
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| self.write_error(e))?;
            }
        }
        Ok(())
    }

    fn write_error(&self, source: io::Error) -> Error {
        let destination = match self {
            Self::File(path) => format!("file '{}'", path.display()),
            Self::Stdout => "stdout".to_string(),
        };
        Error::OutputWrite { destination, source }
    }
}

/// Drains the completion into the sink and optionally reports usage.
///
/// Returns `None` when `report_usage` is false (no accumulator work is
/// done at all); otherwise the report to render, which is
/// [`UsageReport::Unavailable`] when no usage data ever arrived.
///
/// # Errors
///
/// [`Error::StreamRead`] (exit code 23) when the stream fails mid-drain —
/// fragments already written stay in the sink, the trailing newline does
/// not get written, and no usage report is produced.
/// [`Error::OutputWrite`] (exit code 24) when the sink rejects a write.
pub async fn consume(
    completion: Completion,
    sink: &OutputSink,
    report_usage: bool,
) -> Result<Option<UsageReport>> {
    match completion {
        Completion::Whole(response) => {
            let mut content = response.text().to_owned();
            content.push('\n');
            sink.replace(&content)?;

            if !report_usage {
                return Ok(None);
            }

            let mut accumulator = UsageAccumulator::default();
            if let Some(usage) = response.usage() {
                accumulator.add(&usage);
            }
            Ok(Some(accumulator.into_report()))
        }
        Completion::Streamed(mut chunks) => {
            let mut accumulator = report_usage.then(UsageAccumulator::default);

            while let Some(chunk_result) = chunks.next().await {
                let chunk = chunk_result?;

                sink.append(chunk.text())?;

                if let Some(accumulator) = accumulator.as_mut()
                    && let Some(usage) = chunk.usage()
                {
                    accumulator.add(&usage);
                }
            }

            sink.append("\n")?;

            Ok(accumulator.map(UsageAccumulator::into_report))
        }
    }
}

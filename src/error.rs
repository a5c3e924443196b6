//! Error taxonomy and exit-code mapping.
//!
//! Each failure class gets its own process exit code so that scripts
//! wrapping `codeshift` can branch on the cause:
//!
//! | code | class |
//! |------|-------|
//! | 0    | success |
//! | 1    | generic (bad usage, malformed config file, unexpected) |
//! | 20   | missing required configuration or credential |
//! | 21   | input file unreadable |
//! | 22   | completion request failed |
//! | 23   | response stream failed mid-drain |
//! | 24   | output sink write failed |

use std::io;

use thiserror::Error;

/// Exit code for failures that fall outside the taxonomy below.
pub const EXIT_GENERIC: exitcode::ExitCode = 1;

/// Failure classes surfaced at the CLI boundary.
///
/// None of these are recovered locally; a single failed operation
/// terminates the whole invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration or credential is missing.
    #[error("{0}")]
    Config(String),

    /// An input file could not be read. No partial prompt is ever built.
    #[error("failed to read input file '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The completion request failed before any chunk arrived.
    #[error("completion request failed: {0}")]
    ProviderCall(String),

    /// The response stream failed while being drained. Output already
    /// written stays in the sink; the trailing newline is never written.
    #[error("error reading response stream: {0}")]
    StreamRead(String),

    /// Writing to the output file or stdout failed.
    #[error("failed to write output to {destination}: {source}")]
    OutputWrite {
        /// Human-readable sink description (`file '<path>'` or `stdout`).
        destination: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The process exit code for this failure class.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Config(_) => 20,
            Self::InputRead { .. } => 21,
            Self::ProviderCall(_) => 22,
            Self::StreamRead(_) => 23,
            Self::OutputWrite { .. } => 24,
        }
    }
}

/// Maps any error surfaced at the CLI boundary to an exit code.
///
/// Errors outside the taxonomy exit with the generic code.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<Error>()
        .map_or(EXIT_GENERIC, Error::exit_code)
}

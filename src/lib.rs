//! # codeshift - Source-to-Source Conversion CLI
//!
//! `codeshift` takes source files in one programming language and asks an
//! OpenAI-compatible chat-completion endpoint to convert them to another,
//! streaming or writing the generated code to stdout or a file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Convert two files to Rust, streaming to stdout
//! codeshift --stream rust app.js util.js
//!
//! # Write the converted code to a file and report token usage
//! codeshift --output main.go --token-usage go app.js
//!
//! # List providers with known default models
//! codeshift providers
//! ```
//!
//! ## Configuration
//!
//! Settings come from CLI flags, the `BASE_URL`/`API_KEY`/`MODEL`
//! environment variables, and `~/.config/codeshift/config.toml`, in that
//! order of precedence:
//!
//! ```toml
//! [settings]
//! base_url = "https://api.groq.com/openai/v1"
//! api_key = "sk-..."
//! model = "llama3-8b-8192"
//! token_usage = false
//! stream = true
//! ```
//!
//! ## Exit codes
//!
//! Failure classes map to distinct exit codes so scripts can branch on
//! cause: see [`error`].

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and option merging.
pub mod config;

/// Prompt assembly, the completion client, and response consumption.
pub mod conversion;

/// Error taxonomy and exit-code mapping.
pub mod error;

/// Output-file primitives.
pub mod fs;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Supported providers and default models.
pub mod provider;

/// Terminal UI components (spinner, colors).
pub mod ui;

//! Subcommand implementations.

/// Conversion command handler (the default, no subcommand).
pub mod convert;

//! Token-usage extraction, accumulation, and reporting.

use std::fmt;

use super::response::{GroqExtension, TokenUsage};
use crate::ui::Style;

/// Extracts a usage record from the two wire shapes.
///
/// Strategies are tried in order; the provider-specific `x_groq.usage`
/// shape takes precedence over the generic top-level `usage` field when
/// both are present, and a record is only ever taken from one of them.
pub(crate) fn extract_usage(
    x_groq: Option<&GroqExtension>,
    generic: Option<&TokenUsage>,
) -> Option<TokenUsage> {
    let strategies = [x_groq.and_then(|extension| extension.usage.as_ref()), generic];
    strategies.into_iter().flatten().next().copied()
}

/// Running usage totals for one `consume` invocation.
///
/// Created fresh per call, read once at the end, then discarded. Providers
/// that report usage incrementally are summed; providers that send one
/// cumulative record on the final chunk come out the same because the
/// earlier chunks carry no usage.
#[derive(Debug, Default)]
pub struct UsageAccumulator {
    prompt_tokens: u64,
    completion_tokens: u64,
    total_tokens: u64,
}

impl UsageAccumulator {
    /// Adds a usage record into the running totals.
    pub fn add(&mut self, usage: &TokenUsage) {
        self.prompt_tokens += usage.prompt_tokens;
        self.completion_tokens += usage.completion_tokens;
        self.total_tokens += usage.total_tokens;
    }

    /// Produces the final report.
    ///
    /// All-zero totals mean no usage data ever arrived; reporting them as
    /// real counters would misstate "the model returned nothing" as
    /// "used 0 tokens".
    pub fn into_report(self) -> UsageReport {
        if self.prompt_tokens == 0 && self.completion_tokens == 0 && self.total_tokens == 0 {
            UsageReport::Unavailable
        } else {
            UsageReport::Counts(TokenUsage {
                prompt_tokens: self.prompt_tokens,
                completion_tokens: self.completion_tokens,
                total_tokens: self.total_tokens,
            })
        }
    }
}

/// The end-of-run usage report, rendered to stderr.
#[derive(Debug, PartialEq, Eq)]
pub enum UsageReport {
    /// No usage record appeared anywhere in the response.
    Unavailable,
    /// Accumulated counters.
    Counts(TokenUsage),
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => {
                write!(
                    f,
                    "{}",
                    Style::warning("no token usage data returned by the model")
                )
            }
            Self::Counts(usage) => {
                writeln!(f, "{}", Style::header("Token Usage Report"))?;
                writeln!(
                    f,
                    "  {} {}",
                    Style::label("prompt tokens:    "),
                    usage.prompt_tokens
                )?;
                writeln!(
                    f,
                    "  {} {}",
                    Style::label("completion tokens:"),
                    usage.completion_tokens
                )?;
                write!(
                    f,
                    "  {} {}",
                    Style::label("total tokens:     "),
                    usage.total_tokens
                )
            }
        }
    }
}

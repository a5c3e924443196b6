//! Supported providers and their default models.
//!
//! The completion endpoint is OpenAI-compatible, so providers only differ
//! in base URL and default model. The table is matched against the
//! configured base URL by prefix when no model is configured explicitly.

use crate::ui::Style;

/// A supported chat-completion provider.
#[derive(Debug, Clone, Copy)]
pub struct Provider {
    /// Short provider name (e.g. "groq").
    pub name: &'static str,
    /// Base URL of the OpenAI-compatible API, including the version path.
    pub base_url: &'static str,
    /// Model used when none is configured.
    pub default_model: &'static str,
}

/// Providers with a known default model.
///
/// Any OpenAI-compatible endpoint works when a model is configured
/// explicitly; this table only drives model defaulting and `providers`.
pub const SUPPORTED_PROVIDERS: &[Provider] = &[
    Provider {
        name: "openai",
        base_url: "https://api.openai.com/v1",
        default_model: "gpt-4o-mini",
    },
    Provider {
        name: "openrouter",
        base_url: "https://openrouter.ai/api/v1",
        default_model: "meta-llama/llama-3-8b-instruct:free",
    },
    Provider {
        name: "groq",
        base_url: "https://api.groq.com/openai/v1",
        default_model: "llama3-8b-8192",
    },
];

/// Finds the provider whose base URL is a prefix of the given URL.
pub fn find_by_base_url(base_url: &str) -> Option<&'static Provider> {
    SUPPORTED_PROVIDERS
        .iter()
        .find(|provider| base_url.starts_with(provider.base_url))
}

/// Prints the supported-provider table to stdout.
pub fn print_providers() {
    println!("{}", Style::header("Supported providers"));
    for provider in SUPPORTED_PROVIDERS {
        println!(
            "  {:12} {}",
            Style::value(provider.name),
            Style::secondary(provider.base_url)
        );
        println!("  {:12} default model: {}", "", provider.default_model);
    }
    println!();
    println!(
        "{}",
        Style::secondary(
            "Other OpenAI-compatible endpoints work too; set a model explicitly for those."
        )
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_base_url_exact() {
        let provider = find_by_base_url("https://api.groq.com/openai/v1");
        assert_eq!(provider.map(|p| p.name), Some("groq"));
    }

    #[test]
    fn test_find_by_base_url_prefix() {
        // Trailing path segments after the version prefix still match
        let provider = find_by_base_url("https://api.openai.com/v1/");
        assert_eq!(provider.map(|p| p.name), Some("openai"));
    }

    #[test]
    fn test_find_by_base_url_unknown() {
        assert!(find_by_base_url("http://localhost:11434/v1").is_none());
        assert!(find_by_base_url("").is_none());
    }

    #[test]
    fn test_default_models_are_set() {
        for provider in SUPPORTED_PROVIDERS {
            assert!(!provider.default_model.is_empty());
            assert!(provider.base_url.starts_with("https://"));
        }
    }
}

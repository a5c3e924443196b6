//! Config priority contract tests.
//!
//! These tests verify the merge order (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`BASE_URL`, `API_KEY`, `MODEL`)
//! 3. Config file settings
//! 4. Provider-table default model
#![allow(clippy::unwrap_used)]

use serial_test::serial;

use codeshift::config::{ConfigFile, ResolveOptions, Settings, resolve_config};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        settings: Settings {
            base_url: Some("https://openrouter.ai/api/v1".to_string()),
            api_key: Some("sk-file".to_string()),
            output_file: Some("config-output.rs".to_string()),
            model: Some("config-model".to_string()),
            token_usage: Some(false),
            stream: Some(false),
        },
    }
}

fn clear_env() {
    for name in ["BASE_URL", "API_KEY", "MODEL"] {
        unsafe { std::env::remove_var(name) };
    }
}

#[test]
#[serial]
fn test_cli_base_url_overrides_config() {
    clear_env();
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        base_url: Some("https://api.groq.com/openai/v1".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();
    assert_eq!(resolved.base_url, "https://api.groq.com/openai/v1");
}

#[test]
#[serial]
fn test_cli_model_overrides_env_and_config() {
    clear_env();
    unsafe { std::env::set_var("MODEL", "env-model") };

    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("cli-model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();
    assert_eq!(resolved.model, "cli-model");

    clear_env();
}

#[test]
#[serial]
fn test_env_model_overrides_config_model() {
    clear_env();
    unsafe { std::env::set_var("MODEL", "env-model") };

    let resolved = resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();
    assert_eq!(resolved.model, "env-model");

    clear_env();
}

#[test]
#[serial]
fn test_config_used_when_cli_and_env_absent() {
    clear_env();

    let resolved = resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();
    assert_eq!(resolved.base_url, "https://openrouter.ai/api/v1");
    assert_eq!(resolved.api_key, "sk-file");
    assert_eq!(resolved.model, "config-model");
    assert_eq!(resolved.output_file.as_deref(), Some("config-output.rs"));
    assert!(!resolved.token_usage);
    assert!(!resolved.stream);
}

#[test]
#[serial]
fn test_env_api_key_overrides_config() {
    clear_env();
    unsafe { std::env::set_var("API_KEY", "sk-env") };

    let resolved = resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();
    assert_eq!(resolved.api_key, "sk-env");

    clear_env();
}

#[test]
#[serial]
fn test_cli_output_overrides_config_output() {
    clear_env();

    let options = ResolveOptions {
        output: Some("cli-output.rs".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();
    assert_eq!(resolved.output_file.as_deref(), Some("cli-output.rs"));
}

#[test]
#[serial]
fn test_cli_flags_override_config_false() {
    clear_env();

    let options = ResolveOptions {
        token_usage: true,
        stream: true,
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();
    assert!(resolved.token_usage);
    assert!(resolved.stream);
}

#[test]
#[serial]
fn test_default_model_from_provider_table_when_unset() {
    clear_env();

    let mut config = make_config_with_defaults();
    config.settings.model = None;

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();
    // openrouter's table default
    assert_eq!(resolved.model, "meta-llama/llama-3-8b-instruct:free");
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::Error;
use crate::paths;
use crate::provider;

/// Settings in the `[settings]` section of config.toml.
///
/// Every key is optional; CLI flags and environment variables take
/// precedence over the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// OpenAI-compatible API base URL, including the version path.
    pub base_url: Option<String>,
    /// API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Default output file path.
    pub output_file: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Report token usage after each run.
    pub token_usage: Option<bool>,
    /// Stream the response instead of waiting for the whole object.
    pub stream: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/codeshift/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub settings: Settings,
}

/// CLI overrides that take precedence over environment and config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub output: Option<String>,
    pub token_usage: bool,
    pub stream: bool,
}

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub output_file: Option<String>,
    pub token_usage: bool,
    pub stream: bool,
}

/// Resolves configuration by merging, highest precedence first:
/// CLI options, environment variables (`BASE_URL`, `API_KEY`, `MODEL`),
/// the config file, and finally the provider table's default model.
///
/// # Errors
///
/// Returns [`Error::Config`] (exit code 20) when `base_url` or `api_key`
/// is missing, or when no model is configured and the base URL does not
/// match a provider with a known default.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let settings = &config_file.settings;

    let base_url = options
        .base_url
        .clone()
        .or_else(|| env_non_empty("BASE_URL"))
        .or_else(|| settings.base_url.clone())
        .ok_or_else(|| {
            Error::Config(
                "missing required configuration: 'base_url'\n\n\
                 Provide it via:\n  \
                 - CLI option: codeshift --base-url <url> ...\n  \
                 - Environment: export BASE_URL=\"https://api.groq.com/openai/v1\"\n  \
                 - Config file: set base_url under [settings] in ~/.config/codeshift/config.toml"
                    .into(),
            )
        })?;

    let api_key = env_non_empty("API_KEY")
        .or_else(|| settings.api_key.clone())
        .ok_or_else(|| {
            Error::Config(
                "missing required configuration: 'api_key'\n\n\
                 Provide it via:\n  \
                 - Environment: export API_KEY=\"your-api-key\"\n  \
                 - Config file: set api_key under [settings] in ~/.config/codeshift/config.toml"
                    .into(),
            )
        })?;

    let model = match options
        .model
        .clone()
        .or_else(|| env_non_empty("MODEL"))
        .or_else(|| settings.model.clone())
    {
        Some(model) => model,
        None => provider::find_by_base_url(&base_url)
            .map(|p| p.default_model.to_string())
            .ok_or_else(|| {
                Error::Config(format!(
                    "missing required configuration: 'model'\n\n\
                     No default model is known for base URL '{base_url}'.\n\
                     Provide one via:\n  \
                     - CLI option: codeshift --model <name> ...\n  \
                     - Environment: export MODEL=\"<name>\"\n  \
                     - Config file: set model under [settings] in ~/.config/codeshift/config.toml\n\n\
                     Run 'codeshift providers' to see providers with default models."
                ))
            })?,
    };

    let output_file = options.output.clone().or_else(|| settings.output_file.clone());
    let token_usage = options.token_usage || settings.token_usage.unwrap_or(false);
    let stream = options.stream || settings.stream.unwrap_or(false);

    Ok(ResolvedConfig {
        base_url,
        api_key,
        model,
        output_file,
        token_usage,
        stream,
    })
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/codeshift/config.toml`
    /// or `~/.config/codeshift/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty settings.
    ///
    /// A file that exists but cannot be parsed is still an error; silently
    /// ignoring a malformed config would mask typos in credentials.
    pub fn load_if_present(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

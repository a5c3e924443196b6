use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::conversion::{CompletionClient, CompletionRequest, OutputSink, build_prompt, consume};
use crate::ui::Spinner;

pub struct ConvertOptions {
    pub language: String,
    pub files: Vec<String>,
    pub output: Option<String>,
    pub token_usage: bool,
    pub stream: bool,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Runs one conversion: resolve config, assemble the prompt, execute the
/// completion request, and drain the response into the sink.
pub async fn run_convert(options: ConvertOptions) -> Result<()> {
    let config = load_merged_config(&options)?;

    let prompt = build_prompt(&options.language, &options.files)?;

    let client = CompletionClient::new(config.base_url.clone(), config.api_key.clone());
    let request = CompletionRequest {
        prompt,
        model: config.model.clone(),
        stream: config.stream,
    };

    let spinner = Spinner::new("Converting...");
    let completion = client.create(&request).await;
    // Clear before any output lands on the terminal. For streamed
    // responses this fires at response headers, before the first chunk.
    spinner.stop();
    let completion = completion?;

    let sink = OutputSink::from_output_file(config.output_file);
    let report = consume(completion, &sink, config.token_usage).await?;

    if let Some(report) = report {
        eprintln!();
        eprintln!("{report}");
    }

    Ok(())
}

fn load_merged_config(options: &ConvertOptions) -> Result<crate::config::ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_if_present()?;

    let resolve_options = ResolveOptions {
        base_url: options.base_url.clone(),
        model: options.model.clone(),
        output: options.output.clone(),
        token_usage: options.token_usage,
        stream: options.stream,
    };

    resolve_config(&resolve_options, &config_file)
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "codeshift")]
#[command(about = "Convert source files to another programming language using an LLM")]
#[command(version)]
pub struct Args {
    /// Language to convert the source files to (e.g. rust, python, go)
    pub language: Option<String>,

    /// Source files to convert, in order
    pub files: Vec<String>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Report token usage on stderr after the conversion
    #[arg(short = 't', long = "token-usage")]
    pub token_usage: bool,

    /// Stream the response as it arrives
    #[arg(short = 's', long = "stream")]
    pub stream: bool,

    /// API base URL (e.g. https://api.groq.com/openai/v1)
    #[arg(short = 'e', long = "base-url")]
    pub base_url: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported providers and their default models
    Providers,
}

use clap::{CommandFactory, Parser};

use codeshift::cli::commands::convert;
use codeshift::cli::{Args, Command};
use codeshift::ui::Style;
use codeshift::{error, provider};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("error:"));
        std::process::exit(error::exit_code_for(&err));
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Providers) => {
            provider::print_providers();
            Ok(())
        }
        None => {
            let Some(language) = args.language else {
                // No subcommand and no positionals: show help, not an error trace
                Args::command().print_help()?;
                return Ok(());
            };

            let files = args.files;
            if files.is_empty() {
                anyhow::bail!(
                    "missing input files\n\nUsage: codeshift [OPTIONS] <LANGUAGE> <FILES>..."
                );
            }

            let options = convert::ConvertOptions {
                language,
                files,
                output: args.output,
                token_usage: args.token_usage,
                stream: args.stream,
                base_url: args.base_url,
                model: args.model,
            };
            convert::run_convert(options).await
        }
    }
}

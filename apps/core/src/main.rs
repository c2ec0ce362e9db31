// DiscoMind CLI entry point
// Western discourse analysis and Mimamsa principles over plain text

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use discomind_core::error::EMPTY_INPUT_WARNING;
use discomind_core::{input, render, telemetry, AppConfig, AppError, DiscourseAnalyzer, OutputFormat};

/// Exit code for the "no input provided" outcome
const EXIT_NO_INPUT: u8 = 2;

/// Real-time discourse analyzer: segmentation, lexical cohesion, rhetorical
/// intent and Mimamsa classification. No models, no datasets.
#[derive(Parser)]
#[command(name = "discomind", author, version)]
struct Cli {
    /// Text to analyze; reads stdin when neither TEXT nor --file is given
    #[arg(conflicts_with = "file")]
    text: Vec<String>,

    /// Read the text from a .txt or .md file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format (overrides DISCOMIND_OUTPUT)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_input(cli: &Cli, config: &AppConfig) -> Result<String, AppError> {
    if let Some(path) = &cli.file {
        return input::read_file(path, config.max_input_bytes);
    }
    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        input::enforce_limit(&text, config.max_input_bytes)?;
        return Ok(text);
    }
    input::read_stdin(config.max_input_bytes)
}

fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let text = read_input(&cli, &config)?;

    let report = DiscourseAnalyzer::new().analyze(&text)?;
    let format = cli.format.unwrap_or(config.output);
    let rendered = render::render(&report, format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Exit code and stderr line for a failed run
fn failure_outcome(err: &anyhow::Error) -> (u8, String) {
    match err.downcast_ref::<AppError>() {
        Some(app) if app.is_empty_input() => {
            (EXIT_NO_INPUT, format!("Warning: {}", EMPTY_INPUT_WARNING))
        }
        _ => (1, format!("Error: {:#}", err)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_tracing(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let (code, message) = failure_outcome(&e);
            eprintln!("{}", message);
            ExitCode::from(code)
        }
    }
}

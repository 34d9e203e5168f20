//! Process command - extract fields from a single statement file.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardstmt_core::pdf::{DocumentTextSource, TextSource};

use super::report::{OutputFormat, format_records, write_report};
use super::{build_orchestrator, load_config, source_name};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or pre-extracted .txt)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the raw extracted text to stderr
    #[arg(long)]
    show_text: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let orchestrator = build_orchestrator(&config)?;
    let source = DocumentTextSource::from_config(&config);

    let text = source.extract_text(&args.input);
    if args.show_text {
        eprintln!("{}", text.as_deref().unwrap_or("<no text>"));
    }

    let record = orchestrator.process(text.as_deref(), &source_name(&args.input));

    let output = format_records(
        std::slice::from_ref(&record),
        args.format,
        config.output.pretty,
    )?;

    // Write output
    if let Some(output_path) = &args.output {
        write_report(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if let Some(error) = &record.error {
        eprintln!("{} {}", style("✗").red(), error);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

//! Batch processing command for a directory or glob of statements.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use cardstmt_core::error::DocumentError;
use cardstmt_core::models::config::InputConfig;
use cardstmt_core::models::statement::StatementRecord;
use cardstmt_core::pdf::{DocumentTextSource, TextSource};
use cardstmt_core::statement::ResultAggregator;

use super::report::{OutputFormat, format_records, write_report};
use super::{build_orchestrator, load_config, source_name};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory to scan, or a glob pattern
    #[arg(default_value = "samples")]
    input: String,

    /// Report file (default: from config, output/results.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files = discover(&args.input, &config.input)?;
    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.input);
    }

    println!(
        "{} Found {} file(s) to process",
        style("ℹ").blue(),
        files.len()
    );

    let orchestrator = Arc::new(build_orchestrator(&config)?);
    let source = Arc::new(DocumentTextSource::from_config(&config));
    let aggregator = Arc::new(ResultAggregator::new());
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut tasks = JoinSet::new();
    for (index, path) in files.iter().cloned().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        let orchestrator = Arc::clone(&orchestrator);
        let source = Arc::clone(&source);
        let aggregator = Arc::clone(&aggregator);
        let progress = progress.clone();

        tasks.spawn_blocking(move || {
            let _permit = permit;
            let name = source_name(&path);
            debug!("Processing {}", path.display());

            let text = source.extract_text(&path);
            let record = orchestrator.process(text.as_deref(), &name);
            progress.inc(1);
            aggregator.insert(index, record)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(placed) => placed?,
            Err(e) => error!("Worker failed: {}", e),
        }
    }

    // A worker that died still owes its document a record.
    for (index, path) in files.iter().enumerate() {
        if !aggregator.contains(index) {
            aggregator.insert(
                index,
                StatementRecord::failed(DocumentError::TextUnavailable, source_name(path)),
            )?;
        }
    }

    progress.finish_and_clear();

    let results = match Arc::try_unwrap(aggregator) {
        Ok(aggregator) => aggregator.into_results(),
        Err(aggregator) => aggregator.results(),
    };

    let output_path = args.output.clone().unwrap_or_else(|| {
        let mut path = config.output.path.clone();
        path.set_extension(args.format.extension());
        path
    });
    let content = format_records(&results, args.format, config.output.pretty)?;
    write_report(&output_path, &content)?;
    info!("Wrote {} records to {}", results.len(), output_path.display());

    print_summary(&results, &output_path, start);
    Ok(())
}

/// Expand the input into an ordered list of statement files.
///
/// A directory is scanned for accepted extensions; anything else is treated
/// as a glob pattern and filtered the same way. Discovery order is path order.
fn discover(input: &str, config: &InputConfig) -> anyhow::Result<Vec<PathBuf>> {
    let dir = Path::new(input);
    let pattern = if dir.is_dir() {
        let wildcard = if config.recursive { "**/*" } else { "*" };
        dir.join(wildcard).to_string_lossy().into_owned()
    } else {
        input.to_string()
    };

    debug!("Scanning {}", pattern);

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && config.accepts(p))
        .collect();
    files.sort();

    Ok(files)
}

fn print_summary(results: &[StatementRecord], output_path: &Path, start: Instant) {
    let failed: Vec<_> = results.iter().filter(|r| r.is_error()).collect();

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} parsed, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "{} Results saved to {}",
        style("✓").green(),
        output_path.display()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for record in &failed {
            println!(
                "  - {}: {}",
                record.source_file,
                record.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.pdf"), b"").unwrap();
        fs::write(dir.path().join("a.txt"), b"").unwrap();
        fs::write(dir.path().join("image.png"), b"").unwrap();
        fs::write(dir.path().join("nested").join("c.PDF"), b"").unwrap();

        let input = dir.path().to_string_lossy().into_owned();
        let names: Vec<String> = discover(&input, &InputConfig::default())
            .unwrap()
            .iter()
            .map(|p| source_name(p))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.pdf", "c.PDF"]);

        let flat = InputConfig {
            recursive: false,
            ..Default::default()
        };
        assert_eq!(discover(&input, &flat).unwrap().len(), 2);
    }

    #[test]
    fn test_discover_glob() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("one.pdf"), b"").unwrap();
        fs::write(dir.path().join("two.txt"), b"").unwrap();

        let pattern = dir.path().join("*.pdf").to_string_lossy().into_owned();
        let files = discover(&pattern, &InputConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
    }
}

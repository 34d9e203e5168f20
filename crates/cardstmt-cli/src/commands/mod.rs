//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod issuers;
pub mod process;
pub mod report;

use std::path::{Path, PathBuf};

use tracing::debug;

use cardstmt_core::models::config::CardStmtConfig;
use cardstmt_core::statement::{ExtractionOrchestrator, IssuerRegistry};

/// Platform config location, e.g. `~/.config/cardstmt/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardstmt")
        .join("config.json")
}

/// Explicit `--config`, else the default file when it exists, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardStmtConfig> {
    if let Some(path) = config_path {
        return Ok(CardStmtConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(CardStmtConfig::from_file(&default_path)?)
    } else {
        Ok(CardStmtConfig::default())
    }
}

/// Build the orchestrator once per run from the configured registry.
pub fn build_orchestrator(config: &CardStmtConfig) -> anyhow::Result<ExtractionOrchestrator> {
    let registry = IssuerRegistry::from_config(&config.issuers)?;
    if registry.is_empty() {
        anyhow::bail!("No issuers registered; enable built-in issuers or add custom ones");
    }
    Ok(ExtractionOrchestrator::new(registry))
}

/// File identity written to records: the file name, or the full path if it has none.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

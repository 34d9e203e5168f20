//! Configuration structures for the statement pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CardStmtError, Result};
use crate::statement::rules::IssuerProfile;

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardStmtConfig {
    /// Document discovery and acceptance.
    pub input: InputConfig,

    /// PDF text extraction.
    pub pdf: PdfConfig,

    /// Report output.
    pub output: OutputConfig,

    /// Issuer registry.
    pub issuers: IssuerConfig,
}

/// Which documents are picked up and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputConfig {
    /// File extensions (without dot) treated as statements. Files with these
    /// extensions are parsed as PDF regardless of the extension's name.
    pub extensions: Vec<String>,

    /// Read `.txt` files as already-extracted statement text.
    pub accept_plain_text: bool,

    /// Descend into subdirectories when the input is a directory.
    pub recursive: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["pdf".to_string()],
            accept_plain_text: true,
            recursive: true,
        }
    }
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PdfConfig {
    /// Append a `--- Page N ---` marker after each page's text.
    pub page_markers: bool,

    /// Minimum non-whitespace characters for a PDF to count as having text.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_markers: true,
            min_text_length: 1,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// Default report path for batch runs.
    pub path: PathBuf,

    /// Pretty-print JSON reports.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output").join("results.json"),
            pretty: true,
        }
    }
}

/// Issuer registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssuerConfig {
    /// Register the built-in issuers.
    pub include_builtin: bool,

    /// Additional issuers, compiled like the built-ins.
    pub custom: Vec<IssuerProfile>,

    /// Give custom issuers priority over the built-ins.
    pub custom_first: bool,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            custom: Vec::new(),
            custom_first: false,
        }
    }
}

impl InputConfig {
    /// Whether a path has an accepted extension.
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        self.accepts_as_pdf(&ext) || (self.accept_plain_text && ext == "txt")
    }

    /// Whether files with this extension are read as PDF.
    pub fn accepts_as_pdf(&self, extension: &str) -> bool {
        !extension.is_empty() && self.extensions.iter().any(|e| e.eq_ignore_ascii_case(extension))
    }
}

impl CardStmtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CardStmtError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CardStmtError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

//! Upstream text source: document path in, statement text (or nothing) out.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::{PdfExtractor, PdfProcessor, PdfType, Result};
use crate::error::PdfError;
use crate::models::config::{CardStmtConfig, InputConfig, PdfConfig};

/// Produces raw text for a document.
///
/// `None` means the document yielded no usable text; callers turn that into
/// an error record.
pub trait TextSource: Send + Sync {
    fn extract_text(&self, path: &Path) -> Option<String>;
}

/// Reads PDFs (and optionally pre-extracted `.txt` files) from disk.
#[derive(Debug, Clone, Default)]
pub struct DocumentTextSource {
    input: InputConfig,
    pdf: PdfConfig,
}

impl DocumentTextSource {
    pub fn new(input: InputConfig, pdf: PdfConfig) -> Self {
        Self { input, pdf }
    }

    pub fn from_config(config: &CardStmtConfig) -> Self {
        Self::new(config.input.clone(), config.pdf.clone())
    }

    /// Read a document, reporting why it produced no text.
    ///
    /// `.txt` files are read verbatim when plain text is accepted; every other
    /// configured extension is parsed as a PDF.
    pub fn read(&self, path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let text = if extension == "txt" && self.input.accept_plain_text {
            fs::read_to_string(path)?
        } else if self.input.accepts_as_pdf(&extension) {
            self.read_pdf(path)?
        } else {
            return Err(PdfError::Unsupported(path.display().to_string()));
        };

        let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
        if meaningful < self.pdf.min_text_length.max(1) {
            return Err(PdfError::NoText);
        }

        Ok(text)
    }

    fn read_pdf(&self, path: &Path) -> Result<String> {
        let data = fs::read(path)?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;

        let text = if self.pdf.page_markers {
            extractor.extract_text_with_markers()?
        } else {
            extractor.extract_text()?
        };

        match extractor.analyze(&text) {
            PdfType::Image => {
                warn!(
                    "No text extracted from {}. It might be an image-based (scanned) PDF.",
                    path.display()
                );
                Err(PdfError::NoText)
            }
            PdfType::Empty => Err(PdfError::NoText),
            PdfType::Text | PdfType::Hybrid => {
                debug!(
                    "Extracted {} chars from {} ({} pages)",
                    text.len(),
                    path.display(),
                    extractor.page_count()
                );
                Ok(text)
            }
        }
    }
}

impl TextSource for DocumentTextSource {
    fn extract_text(&self, path: &Path) -> Option<String> {
        match self.read(path) {
            Ok(text) => Some(text),
            Err(PdfError::Unsupported(_)) => {
                warn!("Skipping unsupported file: {}", path.display());
                None
            }
            Err(e) => {
                warn!("Could not extract text from {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::one_page_pdf;

    #[test]
    fn test_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hdfc.txt");
        fs::write(&path, "HDFC Bank\nCard No. 1234").unwrap();

        let source = DocumentTextSource::default();
        assert_eq!(source.extract_text(&path).as_deref(), Some("HDFC Bank\nCard No. 1234"));
    }

    #[test]
    fn test_plain_text_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hdfc.txt");
        fs::write(&path, "HDFC Bank").unwrap();

        let source = DocumentTextSource::new(
            InputConfig {
                accept_plain_text: false,
                ..Default::default()
            },
            PdfConfig::default(),
        );
        assert!(matches!(source.read(&path), Err(PdfError::Unsupported(_))));
        assert_eq!(source.extract_text(&path), None);
    }

    #[test]
    fn test_blank_text_is_no_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, " \n\t\n").unwrap();

        assert!(matches!(
            DocumentTextSource::default().read(&path),
            Err(PdfError::NoText)
        ));
    }

    #[test]
    fn test_corrupt_pdf_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4 truncated").unwrap();

        assert_eq!(DocumentTextSource::default().extract_text(&path), None);
    }

    #[test]
    fn test_unreadable_font_encoding_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("odd.pdf");
        fs::write(&path, one_page_pdf("HDFC Bank", Some("BogusEncoding"), false)).unwrap();

        let source = DocumentTextSource::default();
        assert!(matches!(source.read(&path), Err(PdfError::TextExtraction(_))));
        assert_eq!(source.extract_text(&path), None);
    }

    #[test]
    fn test_pdf_text_with_page_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hdfc.pdf");
        fs::write(&path, one_page_pdf("HDFC Bank", None, false)).unwrap();

        let text = DocumentTextSource::default().extract_text(&path).unwrap();
        assert!(text.contains("HDFC"));
        assert!(text.contains("--- Page 1 ---"));
    }

    #[test]
    fn test_image_only_pdf_is_no_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        fs::write(&path, one_page_pdf("", None, true)).unwrap();

        let source = DocumentTextSource::default();
        assert!(source.read(&path).is_err());
        assert_eq!(source.extract_text(&path), None);
    }

    #[test]
    fn test_configured_extension_is_read_as_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("october.stmt");
        fs::write(&path, b"not a pdf").unwrap();

        let source = DocumentTextSource::new(
            InputConfig {
                extensions: vec!["pdf".to_string(), "stmt".to_string()],
                ..Default::default()
            },
            PdfConfig::default(),
        );
        assert!(matches!(source.read(&path), Err(PdfError::Parse(_))));

        let other = dir.path().join("october.csv");
        fs::write(&other, b"a,b").unwrap();
        assert!(matches!(source.read(&other), Err(PdfError::Unsupported(_))));
    }

    #[test]
    fn test_missing_file_yields_none() {
        let source = DocumentTextSource::default();
        assert_eq!(source.extract_text(Path::new("/nonexistent/statement.pdf")), None);
    }
}

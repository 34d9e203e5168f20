//! Document-to-text conversion.

mod extractor;
mod source;

#[cfg(test)]
pub(crate) mod fixtures;

pub use extractor::PdfExtractor;
pub use source::{DocumentTextSource, TextSource};

use crate::error::PdfError;

/// Type of PDF content, judged from the extracted text and image objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// Contains only images (scanned document).
    Image,
    /// Contains both text and images.
    Hybrid,
    /// Empty or unreadable.
    Empty,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Classify the loaded PDF given the text already extracted from it.
    fn analyze(&self, text: &str) -> PdfType;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text page by page.
    fn extract_pages(&self) -> Result<Vec<String>>;
}

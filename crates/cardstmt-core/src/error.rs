//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Errors loading or saving configuration.
#[derive(Error, Debug)]
pub enum CardStmtError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a document into text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF has pages but no extractable text (usually a scan).
    #[error("no extractable text (image-based PDF?)")]
    NoText,

    /// The file is not a supported document type.
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building rules, extractors or the registry.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A rule pattern did not compile.
    #[error("invalid pattern for {issuer}/{field}: {reason}")]
    InvalidPattern {
        issuer: String,
        field: String,
        reason: String,
    },

    /// An issuer signature was empty or whitespace.
    #[error("issuer {0} has an empty signature")]
    EmptySignature(String),

    /// Two records were placed at the same discovery index.
    #[error("result slot {0} is already occupied")]
    SlotOccupied(usize),
}

/// Document-level failures carried on a statement record.
///
/// The `Display` output is the exact message stored in the record's `error`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// Upstream could not produce text for the document.
    #[error("Failed to extract text")]
    TextUnavailable,

    /// No registered signature matched the text.
    #[error("No matching parser found for this statement")]
    UnknownIssuer,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, CardStmtError>;

//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction (with page markers and scanned-PDF detection)
//! - Issuer identification by ordered signature lookup
//! - Declarative per-issuer field rules (HDFC, ICICI, Chase, American Express, Citi)
//! - Ordered aggregation of per-document statement records

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{CardStmtError, DocumentError, ExtractionError, PdfError, Result};
pub use models::config::CardStmtConfig;
pub use models::statement::{ExtractedFields, Field, StatementRecord, UNKNOWN_ISSUER};
pub use pdf::{DocumentTextSource, PdfExtractor, PdfProcessor, PdfType, TextSource};
pub use statement::{
    ExtractionOrchestrator, FieldExtractor, FieldOutcome, Identification, IssuerIdentifier,
    IssuerRegistry, PatternExtractor, ResultAggregator,
};

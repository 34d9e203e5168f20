//! Statement issuer identification and field extraction.

mod aggregator;
mod extractor;
mod identifier;
mod orchestrator;
mod registry;
pub mod rules;

pub use aggregator::ResultAggregator;
pub use extractor::{FieldOutcome, PatternExtractor};
pub use identifier::{Identification, IssuerIdentifier};
pub use orchestrator::ExtractionOrchestrator;
pub use registry::{IssuerRegistry, RegistryEntry};

use crate::error::ExtractionError;
use crate::models::statement::ExtractedFields;

/// Result type for extraction setup operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Per-issuer strategy turning statement text into fields.
///
/// Implementations must not panic; a field that cannot be read is absent.
pub trait FieldExtractor: Send + Sync {
    /// Issuer name written to records produced by this extractor.
    fn issuer(&self) -> &str;

    /// Extract whatever fields the text contains.
    fn extract(&self, text: &str) -> ExtractedFields;
}

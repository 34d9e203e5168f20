//! Per-document pipeline: identify the issuer, run its extractor, build a record.

use tracing::{debug, info, warn};

use crate::error::DocumentError;
use crate::models::statement::StatementRecord;

use super::{Identification, IssuerIdentifier, IssuerRegistry, ResultAggregator};

/// Turns statement text into [`StatementRecord`]s.
///
/// Holds only the immutable registry, so one orchestrator can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct ExtractionOrchestrator {
    registry: IssuerRegistry,
}

impl ExtractionOrchestrator {
    pub fn new(registry: IssuerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &IssuerRegistry {
        &self.registry
    }

    pub fn identifier(&self) -> IssuerIdentifier<'_> {
        IssuerIdentifier::new(&self.registry)
    }

    /// Process one document. Never fails: problems become error records.
    ///
    /// `text` is `None` (or blank) when upstream text extraction failed.
    pub fn process(&self, text: Option<&str>, source_file: &str) -> StatementRecord {
        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("No text for {}", source_file);
                return StatementRecord::failed(DocumentError::TextUnavailable, source_file);
            }
        };

        match self.identifier().identify(text) {
            Identification::Issuer(entry) => {
                let fields = entry.extractor().extract(text);
                let missing = fields.missing();
                if missing.is_empty() {
                    debug!("{}: all fields extracted", source_file);
                } else {
                    debug!("{}: missing {}", source_file, missing.join(", "));
                }
                StatementRecord::identified(entry.issuer(), fields, source_file)
            }
            Identification::Unknown => {
                warn!("Unknown issuer for {}", source_file);
                StatementRecord::failed(DocumentError::UnknownIssuer, source_file)
            }
        }
    }

    /// Process an ordered batch. Always yields one record per document, in order.
    pub fn process_batch<I, T, S>(&self, documents: I) -> Vec<StatementRecord>
    where
        I: IntoIterator<Item = (Option<T>, S)>,
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let aggregator = ResultAggregator::new();

        for (text, source_file) in documents {
            let text: Option<&str> = text.as_ref().map(|t| t.as_ref());
            let record = self.process(text, source_file.as_ref());
            aggregator.append(record);
        }

        let results = aggregator.into_results();
        let failed = results.iter().filter(|r| r.is_error()).count();
        info!("Processed {} statements, {} failed", results.len(), failed);
        results
    }
}

//! Statement record and extracted field models.

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Issuer name used when no registered signature matched.
pub const UNKNOWN_ISSUER: &str = "Unknown";

/// One processed statement document.
///
/// Field order is the serialization order of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRecord {
    /// Issuer name, or [`UNKNOWN_ISSUER`].
    pub issuer: String,

    /// Masked or partial account digits as printed (length varies by issuer).
    pub last4_digits: Option<String>,

    /// Payment due date exactly as printed.
    pub due_date: Option<String>,

    /// Total amount due with thousands separators removed.
    pub total_due: Option<String>,

    /// `"<start> to <end>"` when both bounds were found.
    pub statement_period: Option<String>,

    /// Originating document.
    pub source_file: String,

    /// Set only when extraction could not proceed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatementRecord {
    /// Record for a document whose issuer was identified.
    pub fn identified(
        issuer: impl Into<String>,
        fields: ExtractedFields,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            last4_digits: fields.last4_digits,
            due_date: fields.due_date,
            total_due: fields.total_due,
            statement_period: fields.statement_period,
            source_file: source_file.into(),
            error: None,
        }
    }

    /// Record for a document that could not be processed.
    pub fn failed(error: DocumentError, source_file: impl Into<String>) -> Self {
        Self {
            issuer: UNKNOWN_ISSUER.to_string(),
            last4_digits: None,
            due_date: None,
            total_due: None,
            statement_period: None,
            source_file: source_file.into(),
            error: Some(error.to_string()),
        }
    }

    /// Whether the record carries a document-level error.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The extracted fields, detached from issuer and source.
    pub fn fields(&self) -> ExtractedFields {
        ExtractedFields {
            last4_digits: self.last4_digits.clone(),
            due_date: self.due_date.clone(),
            total_due: self.total_due.clone(),
            statement_period: self.statement_period.clone(),
        }
    }
}

/// Partial result of a field extractor. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    pub last4_digits: Option<String>,
    pub due_date: Option<String>,
    pub total_due: Option<String>,
    pub statement_period: Option<String>,
}

impl ExtractedFields {
    /// Names of the fields that were not found.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.last4_digits.is_none() {
            missing.push(Field::Last4Digits.name());
        }
        if self.due_date.is_none() {
            missing.push(Field::DueDate.name());
        }
        if self.total_due.is_none() {
            missing.push(Field::TotalDue.name());
        }
        if self.statement_period.is_none() {
            missing.push(Field::StatementPeriod.name());
        }
        missing
    }

    /// Number of fields that were found.
    pub fn found_count(&self) -> usize {
        4 - self.missing().len()
    }
}

/// The four extractable statement fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Last4Digits,
    DueDate,
    TotalDue,
    StatementPeriod,
}

impl Field {
    /// Report key of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Last4Digits => "last4Digits",
            Field::DueDate => "dueDate",
            Field::TotalDue => "totalDue",
            Field::StatementPeriod => "statementPeriod",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

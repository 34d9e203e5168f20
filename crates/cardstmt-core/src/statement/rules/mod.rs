//! Declarative field rules and the built-in issuer tables.
//!
//! A rule pairs a label with a value shape. Rules are data: the same
//! evaluation routine in [`crate::statement::PatternExtractor`] runs every
//! issuer's tables, and config-defined issuers deserialize into the same
//! structures.

pub mod amex;
pub mod chase;
pub mod citi;
pub mod hdfc;
pub mod icici;
pub mod patterns;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub use patterns::{compile_period_range, compile_rule, compile_signature, shape_fragment, RangePattern};

/// Shape of the value captured after a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueShape {
    /// Exactly `n` consecutive digits.
    Digits(u8),
    /// Three-letter month and day, e.g. `Oct 5`.
    MonthDay,
    /// Three-letter month, day and year, e.g. `Oct 25, 2024`.
    MonthDayYear,
    /// `dd/dd/dddd`.
    SlashDate,
    /// `dd/dd/dd`.
    ShortSlashDate,
    /// Amount with optional thousands separators and two decimals.
    Amount,
    /// Amount preceded by a currency symbol, e.g. `$`.
    PrefixedAmount(String),
    /// Raw regex fragment; the first capture group is the value.
    Pattern(String),
}

/// One entry in a field's fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Label text, matched literally and case-insensitively.
    pub label: String,
    /// Value captured after the label.
    pub value: ValueShape,
}

impl FieldRule {
    pub fn new(label: impl Into<String>, value: ValueShape) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Rule for the composite statement period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodRule {
    /// One label followed by `<start> <separator> <end>`.
    Range {
        label: String,
        value: ValueShape,
        separator: String,
    },
    /// Two independently labelled bounds. Both must match.
    Bounds {
        start: Vec<FieldRule>,
        end: Vec<FieldRule>,
    },
}

impl PeriodRule {
    pub fn range(label: impl Into<String>, value: ValueShape, separator: impl Into<String>) -> Self {
        PeriodRule::Range {
            label: label.into(),
            value,
            separator: separator.into(),
        }
    }

    pub fn bounds(start: FieldRule, end: FieldRule) -> Self {
        PeriodRule::Bounds {
            start: vec![start],
            end: vec![end],
        }
    }
}

/// Declarative description of one issuer's statement layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerProfile {
    /// Issuer name written to records.
    pub name: String,

    /// Phrase whose presence identifies the issuer.
    pub signature: String,

    #[serde(default)]
    pub last4_digits: Vec<FieldRule>,

    #[serde(default)]
    pub due_date: Vec<FieldRule>,

    #[serde(default)]
    pub total_due: Vec<FieldRule>,

    #[serde(default)]
    pub statement_period: Vec<PeriodRule>,
}

impl IssuerProfile {
    /// Profile with no rules; every field will be absent.
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            last4_digits: Vec::new(),
            due_date: Vec::new(),
            total_due: Vec::new(),
            statement_period: Vec::new(),
        }
    }

    pub fn last4_digits(mut self, rule: FieldRule) -> Self {
        self.last4_digits.push(rule);
        self
    }

    pub fn due_date(mut self, rule: FieldRule) -> Self {
        self.due_date.push(rule);
        self
    }

    pub fn total_due(mut self, rule: FieldRule) -> Self {
        self.total_due.push(rule);
        self
    }

    pub fn statement_period(mut self, rule: PeriodRule) -> Self {
        self.statement_period.push(rule);
        self
    }
}

lazy_static! {
    static ref BUILTIN_PROFILES: Vec<IssuerProfile> = vec![
        hdfc::profile(),
        icici::profile(),
        chase::profile(),
        amex::profile(),
        citi::profile(),
    ];
}

/// Built-in issuer profiles in priority order.
pub fn builtin_profiles() -> &'static [IssuerProfile] {
    &BUILTIN_PROFILES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_order() {
        let names: Vec<&str> = builtin_profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["HDFC", "ICICI", "Chase", "American Express", "Citi"]);
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{
            "name": "Axis",
            "signature": "Axis Bank",
            "last4Digits": [{ "label": "Card No", "value": { "digits": 4 } }],
            "totalDue": [{ "label": "Total Payment Due", "value": "amount" }],
            "statementPeriod": [
                { "range": { "label": "Statement Period", "value": "slashDate", "separator": "-" } }
            ]
        }"#;

        let profile: IssuerProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.name, "Axis");
        assert_eq!(profile.last4_digits, vec![FieldRule::new("Card No", ValueShape::Digits(4))]);
        assert!(profile.due_date.is_empty());
        assert_eq!(
            profile.statement_period,
            vec![PeriodRule::range("Statement Period", ValueShape::SlashDate, "-")]
        );
    }
}

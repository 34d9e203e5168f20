//! Generic rule-table extractor shared by every issuer.

use regex::Regex;
use tracing::{trace, warn};

use crate::error::ExtractionError;
use crate::models::statement::{ExtractedFields, Field};

use super::FieldExtractor;
use super::rules::{FieldRule, IssuerProfile, PeriodRule, compile_period_range, compile_rule};

/// Outcome of evaluating one field's rule chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// A rule matched. `rule` is its index in the chain.
    Found { value: String, rule: usize },
    /// No rule matched.
    Missing,
    /// A rule matched but its value could not be read.
    Faulted(String),
}

impl FieldOutcome {
    /// The value, with faults degraded to an absent field.
    pub fn into_value(self) -> Option<String> {
        match self {
            FieldOutcome::Found { value, .. } => Some(value),
            FieldOutcome::Missing | FieldOutcome::Faulted(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    label: String,
    regex: Regex,
}

#[derive(Debug, Clone)]
enum CompiledPeriod {
    Range {
        regex: Regex,
        start_group: usize,
        end_group: usize,
    },
    Bounds {
        start: Vec<CompiledRule>,
        end: Vec<CompiledRule>,
    },
}

/// Field extractor driven by an [`IssuerProfile`].
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    issuer: String,
    last4_digits: Vec<CompiledRule>,
    due_date: Vec<CompiledRule>,
    total_due: Vec<CompiledRule>,
    statement_period: Vec<CompiledPeriod>,
}

impl PatternExtractor {
    /// Compile every rule of a profile.
    pub fn compile(profile: &IssuerProfile) -> Result<Self, ExtractionError> {
        let issuer = profile.name.as_str();

        let statement_period = profile
            .statement_period
            .iter()
            .map(|rule| compile_period(issuer, rule))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            issuer: profile.name.clone(),
            last4_digits: compile_chain(issuer, Field::Last4Digits, &profile.last4_digits)?,
            due_date: compile_chain(issuer, Field::DueDate, &profile.due_date)?,
            total_due: compile_chain(issuer, Field::TotalDue, &profile.total_due)?,
            statement_period,
        })
    }

    /// Evaluate a single field.
    pub fn evaluate(&self, field: Field, text: &str) -> FieldOutcome {
        match field {
            Field::Last4Digits => first_match(&self.last4_digits, text),
            Field::DueDate => first_match(&self.due_date, text),
            Field::TotalDue => match first_match(&self.total_due, text) {
                FieldOutcome::Found { value, rule } => FieldOutcome::Found {
                    value: strip_thousands(&value),
                    rule,
                },
                other => other,
            },
            Field::StatementPeriod => self.evaluate_period(text),
        }
    }

    fn evaluate_period(&self, text: &str) -> FieldOutcome {
        let mut fault = None;

        for (index, period) in self.statement_period.iter().enumerate() {
            let bounds = match period {
                CompiledPeriod::Range {
                    regex,
                    start_group,
                    end_group,
                } => match regex.captures(text) {
                    Some(caps) => match (caps.get(*start_group), caps.get(*end_group)) {
                        (Some(start), Some(end)) => {
                            Some((start.as_str().trim().to_string(), end.as_str().trim().to_string()))
                        }
                        _ => {
                            fault = Some(format!("period rule {} matched without both bounds", index));
                            None
                        }
                    },
                    None => None,
                },
                CompiledPeriod::Bounds { start, end } => {
                    match (first_match(start, text), first_match(end, text)) {
                        (
                            FieldOutcome::Found { value: start, .. },
                            FieldOutcome::Found { value: end, .. },
                        ) => Some((start, end)),
                        (FieldOutcome::Faulted(reason), _) | (_, FieldOutcome::Faulted(reason)) => {
                            fault = Some(reason);
                            None
                        }
                        _ => None,
                    }
                }
            };

            if let Some((start, end)) = bounds {
                return FieldOutcome::Found {
                    value: format!("{} to {}", start, end),
                    rule: index,
                };
            }
        }

        fault.map_or(FieldOutcome::Missing, FieldOutcome::Faulted)
    }
}

impl FieldExtractor for PatternExtractor {
    fn issuer(&self) -> &str {
        &self.issuer
    }

    fn extract(&self, text: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::default();

        for field in [
            Field::Last4Digits,
            Field::DueDate,
            Field::TotalDue,
            Field::StatementPeriod,
        ] {
            let outcome = self.evaluate(field, text);
            match &outcome {
                FieldOutcome::Found { value, rule } => {
                    trace!("{}: {} = {:?} (rule {})", self.issuer, field, value, rule)
                }
                FieldOutcome::Missing => trace!("{}: {} not found", self.issuer, field),
                FieldOutcome::Faulted(reason) => {
                    warn!("{}: {} skipped: {}", self.issuer, field, reason)
                }
            }

            let value = outcome.into_value();
            match field {
                Field::Last4Digits => fields.last4_digits = value,
                Field::DueDate => fields.due_date = value,
                Field::TotalDue => fields.total_due = value,
                Field::StatementPeriod => fields.statement_period = value,
            }
        }

        fields
    }
}

/// Try rules in order; the first rule whose pattern matches wins.
fn first_match(rules: &[CompiledRule], text: &str) -> FieldOutcome {
    let mut fault = None;

    for (index, rule) in rules.iter().enumerate() {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };

        match caps.get(1).map(|m| m.as_str().trim()) {
            Some(value) if !value.is_empty() => {
                return FieldOutcome::Found {
                    value: value.to_string(),
                    rule: index,
                };
            }
            _ => {
                fault = Some(format!("rule {:?} matched an empty value", rule.label));
            }
        }
    }

    fault.map_or(FieldOutcome::Missing, FieldOutcome::Faulted)
}

fn strip_thousands(amount: &str) -> String {
    amount.replace(',', "")
}

fn compile_chain(
    issuer: &str,
    field: Field,
    rules: &[FieldRule],
) -> Result<Vec<CompiledRule>, ExtractionError> {
    rules
        .iter()
        .map(|rule| {
            let regex = compile_rule(rule).map_err(|reason| ExtractionError::InvalidPattern {
                issuer: issuer.to_string(),
                field: field.name().to_string(),
                reason,
            })?;
            Ok(CompiledRule {
                label: rule.label.clone(),
                regex,
            })
        })
        .collect()
}

fn compile_period(issuer: &str, rule: &PeriodRule) -> Result<CompiledPeriod, ExtractionError> {
    match rule {
        PeriodRule::Range {
            label,
            value,
            separator,
        } => {
            let range = compile_period_range(label, value, separator).map_err(|reason| {
                ExtractionError::InvalidPattern {
                    issuer: issuer.to_string(),
                    field: Field::StatementPeriod.name().to_string(),
                    reason,
                }
            })?;
            Ok(CompiledPeriod::Range {
                regex: range.regex,
                start_group: range.start_group,
                end_group: range.end_group,
            })
        }
        PeriodRule::Bounds { start, end } => Ok(CompiledPeriod::Bounds {
            start: compile_chain(issuer, Field::StatementPeriod, start)?,
            end: compile_chain(issuer, Field::StatementPeriod, end)?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::rules::ValueShape;
    use pretty_assertions::assert_eq;

    fn profile() -> IssuerProfile {
        IssuerProfile::new("Test", "Test Bank")
            .due_date(FieldRule::new("Pay By", ValueShape::MonthDayYear))
            .due_date(FieldRule::new("Due", ValueShape::SlashDate))
            .total_due(FieldRule::new("Amount Due", ValueShape::Amount))
    }

    #[test]
    fn test_fallback_chain_order() {
        let extractor = PatternExtractor::compile(&profile()).unwrap();

        assert_eq!(
            extractor.evaluate(Field::DueDate, "Due 01/02/2025\nPay By Mar 3, 2025"),
            FieldOutcome::Found {
                value: "Mar 3, 2025".to_string(),
                rule: 0
            }
        );
        assert_eq!(
            extractor.evaluate(Field::DueDate, "Due\n\n01/02/2025"),
            FieldOutcome::Found {
                value: "01/02/2025".to_string(),
                rule: 1
            }
        );
    }

    #[test]
    fn test_missing_rules_yield_missing() {
        let extractor = PatternExtractor::compile(&profile()).unwrap();

        assert_eq!(extractor.evaluate(Field::Last4Digits, "Card 1234"), FieldOutcome::Missing);
        assert_eq!(extractor.evaluate(Field::StatementPeriod, "anything"), FieldOutcome::Missing);
    }

    #[test]
    fn test_amount_drops_separators() {
        let extractor = PatternExtractor::compile(&profile()).unwrap();
        assert_eq!(
            extractor.evaluate(Field::TotalDue, "Amount Due: 12,345,678.90").into_value(),
            Some("12345678.90".to_string())
        );
    }

    #[test]
    fn test_faulted_rule_does_not_block_siblings() {
        let profile = IssuerProfile::new("Test", "Test Bank")
            .last4_digits(FieldRule::new(
                "Card",
                ValueShape::Pattern(r"(\d{4})?".to_string()),
            ))
            .total_due(FieldRule::new("Amount Due", ValueShape::Amount));
        let extractor = PatternExtractor::compile(&profile).unwrap();
        let text = "Card ending XXXX\nAmount Due 10.00";

        assert!(matches!(
            extractor.evaluate(Field::Last4Digits, text),
            FieldOutcome::Faulted(_)
        ));

        let fields = extractor.extract(text);
        assert_eq!(fields.last4_digits, None);
        assert_eq!(fields.total_due.as_deref(), Some("10.00"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let profile = IssuerProfile::new("Broken", "Broken Bank")
            .total_due(FieldRule::new("Due", ValueShape::Pattern("([0-9".to_string())));

        let err = PatternExtractor::compile(&profile).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::InvalidPattern { ref field, .. } if field == "totalDue"
        ));
    }
}

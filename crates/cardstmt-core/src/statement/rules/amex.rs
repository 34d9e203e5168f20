//! American Express statements.
//!
//! Amex prints five account digits and omits the year on the due date. The
//! statement period comes from two separately labelled dates.

use super::{FieldRule, IssuerProfile, PeriodRule, ValueShape};

pub const NAME: &str = "American Express";
pub const SIGNATURE: &str = "American Express";

pub fn profile() -> IssuerProfile {
    IssuerProfile::new(NAME, SIGNATURE)
        .last4_digits(FieldRule::new("Account", ValueShape::Digits(5)))
        .due_date(FieldRule::new("Please pay by", ValueShape::MonthDay))
        .total_due(FieldRule::new(
            "Total Balance",
            ValueShape::PrefixedAmount("$".to_string()),
        ))
        .statement_period(PeriodRule::bounds(
            FieldRule::new("Opening Date", ValueShape::MonthDayYear),
            FieldRule::new("Closing Date", ValueShape::MonthDayYear),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::ExtractedFields;
    use crate::statement::{FieldExtractor, PatternExtractor};
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> ExtractedFields {
        PatternExtractor::compile(&profile()).unwrap().extract(text)
    }

    #[test]
    fn test_full_statement() {
        let text = r#"
American Express Blue Cash Everyday
Account Ending 3-71004
Closing Date Oct 2, 2024
Opening Date Sep 3, 2024
Total Balance          $987.65
Please pay by
Oct 27
"#;

        assert_eq!(
            extract(text),
            ExtractedFields {
                last4_digits: Some("71004".to_string()),
                due_date: Some("Oct 27".to_string()),
                total_due: Some("987.65".to_string()),
                statement_period: Some("Sep 3, 2024 to Oct 2, 2024".to_string()),
            }
        );
    }

    #[test]
    fn test_period_needs_both_bounds() {
        let text = "American Express\nOpening Date Sep 3, 2024\n";
        assert_eq!(extract(text).statement_period, None);

        let text = "American Express\nClosing Date Oct 2, 2024\n";
        assert_eq!(extract(text).statement_period, None);
    }
}

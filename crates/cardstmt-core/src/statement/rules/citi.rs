//! Citi credit card statements.

use super::{FieldRule, IssuerProfile, PeriodRule, ValueShape};

pub const NAME: &str = "Citi";
pub const SIGNATURE: &str = "Citi";

pub fn profile() -> IssuerProfile {
    IssuerProfile::new(NAME, SIGNATURE)
        .last4_digits(FieldRule::new("Account Number", ValueShape::Digits(4)))
        .due_date(FieldRule::new("Payment Due Date", ValueShape::ShortSlashDate))
        .total_due(FieldRule::new(
            "Total Balance Due",
            ValueShape::PrefixedAmount("$".to_string()),
        ))
        .statement_period(PeriodRule::range(
            "Statement Period",
            ValueShape::ShortSlashDate,
            "-",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{FieldExtractor, PatternExtractor};

    #[test]
    fn test_total_balance_due() {
        let text = "Citi Double Cash\nTotal Balance Due ... $1,234.56";
        let fields = PatternExtractor::compile(&profile()).unwrap().extract(text);
        assert_eq!(fields.total_due.as_deref(), Some("1234.56"));
    }

    #[test]
    fn test_period_and_due_date() {
        let text = "Citibank\nStatement Period 08/05/24-09/04/24\nAccount Number ending 6620\nPayment Due Date\n09/30/24";
        let fields = PatternExtractor::compile(&profile()).unwrap().extract(text);

        assert_eq!(fields.statement_period.as_deref(), Some("08/05/24 to 09/04/24"));
        assert_eq!(fields.last4_digits.as_deref(), Some("6620"));
        assert_eq!(fields.due_date.as_deref(), Some("09/30/24"));
    }

    #[test]
    fn test_missing_labels_leave_fields_absent() {
        let text = "Citi Custom Cash\nTotal Balance Due $250.00\nMinimum Payment $25.00\n";
        let fields = PatternExtractor::compile(&profile()).unwrap().extract(text);

        assert_eq!(fields.total_due.as_deref(), Some("250.00"));
        assert_eq!(fields.last4_digits, None);
        assert_eq!(fields.due_date, None);
        assert_eq!(fields.statement_period, None);
    }
}

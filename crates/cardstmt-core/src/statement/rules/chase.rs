//! Chase credit card statements.

use super::{FieldRule, IssuerProfile, PeriodRule, ValueShape};

pub const NAME: &str = "Chase";
pub const SIGNATURE: &str = "Chase";

pub fn profile() -> IssuerProfile {
    IssuerProfile::new(NAME, SIGNATURE)
        .last4_digits(FieldRule::new("Account ending in", ValueShape::Digits(4)))
        .due_date(FieldRule::new("Payment Due Date:", ValueShape::MonthDayYear))
        .total_due(FieldRule::new(
            "New Balance",
            ValueShape::PrefixedAmount("$".to_string()),
        ))
        .statement_period(PeriodRule::range(
            "Opening/Closing Date",
            ValueShape::ShortSlashDate,
            "-",
        ))
}

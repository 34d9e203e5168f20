//! ICICI Bank credit card statements.

use super::{FieldRule, IssuerProfile, PeriodRule, ValueShape};

pub const NAME: &str = "ICICI";
pub const SIGNATURE: &str = "ICICI Bank";

pub fn profile() -> IssuerProfile {
    IssuerProfile::new(NAME, SIGNATURE)
        .last4_digits(FieldRule::new("Card Number", ValueShape::Digits(4)))
        .due_date(FieldRule::new("Payment Due Date", ValueShape::SlashDate))
        .total_due(FieldRule::new("Total Dues", ValueShape::Amount))
        .statement_period(PeriodRule::range("Statement Period", ValueShape::SlashDate, "to"))
}

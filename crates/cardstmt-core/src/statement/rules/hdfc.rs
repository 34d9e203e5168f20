//! HDFC Bank credit card statements.
//!
//! Dates are `dd/mm/yyyy`; amounts carry no currency symbol in the
//! extracted text (the rupee glyph rarely survives PDF extraction).

use super::{FieldRule, IssuerProfile, PeriodRule, ValueShape};

pub const NAME: &str = "HDFC";
pub const SIGNATURE: &str = "HDFC Bank";

pub fn profile() -> IssuerProfile {
    IssuerProfile::new(NAME, SIGNATURE)
        .last4_digits(FieldRule::new("Card No.", ValueShape::Digits(4)))
        .due_date(FieldRule::new("Payment Due Date", ValueShape::SlashDate))
        .total_due(FieldRule::new("Total Amount Due", ValueShape::Amount))
        .statement_period(PeriodRule::range("Statement Period", ValueShape::SlashDate, "to"))
}

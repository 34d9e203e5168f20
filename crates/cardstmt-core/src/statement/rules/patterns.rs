//! Regex construction for field rules.
//!
//! Every rule compiles to `(?is)<label>.*?<value>`: the label is matched
//! literally and case-insensitively, and the lazy gap spans any text,
//! including line and page breaks.

use regex::Regex;

use super::{FieldRule, ValueShape};

const MONTH_DAY: &str = r"(\w{3}\s\d{1,2})";
const MONTH_DAY_YEAR: &str = r"(\w{3}\s\d{1,2},\s\d{4})";
const SLASH_DATE: &str = r"(\d{2}/\d{2}/\d{4})";
const SHORT_SLASH_DATE: &str = r"(\d{2}/\d{2}/\d{2})";
const AMOUNT: &str = r"([\d,]+\.\d{2})";

/// Regex fragment capturing a value of the given shape.
pub fn shape_fragment(shape: &ValueShape) -> String {
    match shape {
        ValueShape::Digits(n) => format!(r"(\d{{{}}})", n),
        ValueShape::MonthDay => MONTH_DAY.to_string(),
        ValueShape::MonthDayYear => MONTH_DAY_YEAR.to_string(),
        ValueShape::SlashDate => SLASH_DATE.to_string(),
        ValueShape::ShortSlashDate => SHORT_SLASH_DATE.to_string(),
        ValueShape::Amount => AMOUNT.to_string(),
        ValueShape::PrefixedAmount(symbol) => format!("{}{}", regex::escape(symbol), AMOUNT),
        ValueShape::Pattern(raw) => raw.clone(),
    }
}

/// Number of capture groups a fragment declares.
fn group_count(fragment: &str) -> Result<usize, String> {
    let regex = Regex::new(fragment).map_err(|e| e.to_string())?;
    Ok(regex.captures_len() - 1)
}

/// Compile a single-value rule. The value is capture group 1.
pub fn compile_rule(rule: &FieldRule) -> Result<Regex, String> {
    let fragment = shape_fragment(&rule.value);
    if group_count(&fragment)? == 0 {
        return Err(format!("pattern {:?} has no capture group", fragment));
    }

    Regex::new(&format!(r"(?is){}.*?{}", regex::escape(&rule.label), fragment))
        .map_err(|e| e.to_string())
}

/// A compiled `label <start> <separator> <end>` pattern.
#[derive(Debug, Clone)]
pub struct RangePattern {
    pub regex: Regex,
    pub start_group: usize,
    pub end_group: usize,
}

/// Compile a range period rule. Whitespace around the separator is optional.
pub fn compile_period_range(
    label: &str,
    shape: &ValueShape,
    separator: &str,
) -> Result<RangePattern, String> {
    let fragment = shape_fragment(shape);
    let groups = group_count(&fragment)?;
    if groups == 0 {
        return Err(format!("pattern {:?} has no capture group", fragment));
    }

    let regex = Regex::new(&format!(
        r"(?is){}.*?{}\s*{}\s*{}",
        regex::escape(label),
        fragment,
        regex::escape(separator.trim()),
        fragment
    ))
    .map_err(|e| e.to_string())?;

    Ok(RangePattern {
        regex,
        start_group: 1,
        end_group: 1 + groups,
    })
}

/// Compile an issuer signature into a case-insensitive literal matcher.
pub fn compile_signature(signature: &str) -> Result<Regex, String> {
    Regex::new(&format!("(?i){}", regex::escape(signature))).map_err(|e| e.to_string())
}

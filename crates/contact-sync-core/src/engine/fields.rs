//! Per-field converters
//!
//! Each converter handles one column of a person record. They know nothing
//! about record ids; the engine attaches those when building errors.

use crate::contracts::SourceRecord;
use crate::error::{MalformedRecordError, Result};
use serde_json::Value;

/// Currency marker prefixing lifetime values
pub const CURRENCY_SIGIL: char = '$';

/// Separator between date components
pub const DATE_SEPARATOR: char = '-';

/// Why a lifetime value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AmountError {
    MissingSigil,
    NotDecimal,
}

/// Fetch a required string field
pub(crate) fn required_str<'a>(record: &'a SourceRecord, field: &'static str) -> Result<&'a str> {
    match record.field(field) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(MalformedRecordError::NotAString {
            record_id: record.id.clone(),
            field,
        }),
        None => Err(MalformedRecordError::MissingField {
            record_id: record.id.clone(),
            field,
        }),
    }
}

/// Strip leading and trailing whitespace only
pub(crate) fn trim_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Reorder `MM-DD-YYYY` into `YYYY-MM-DD`
///
/// Purely positional: the components are checked for width and digits but
/// never interpreted as a calendar date.
pub(crate) fn reorder_date(raw: &str) -> Option<String> {
    let parts: Vec<&str> = raw.split(DATE_SEPARATOR).collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };

    if !is_digits(month, 2) || !is_digits(day, 2) || !is_digits(year, 4) {
        return None;
    }

    Some(format!("{}{sep}{}{sep}{}", year, month, day, sep = DATE_SEPARATOR))
}

/// Strip the sigil and read the remaining decimal amount
pub(crate) fn parse_lifetime_value(raw: &str) -> std::result::Result<f64, AmountError> {
    let amount = raw
        .strip_prefix(CURRENCY_SIGIL)
        .ok_or(AmountError::MissingSigil)?;

    if !is_plain_decimal(amount) {
        return Err(AmountError::NotDecimal);
    }

    let value = amount.parse::<f64>().map_err(|_| AmountError::NotDecimal)?;

    // Overlong digit strings parse to infinity, which serializes as null
    if !value.is_finite() {
        return Err(AmountError::NotDecimal);
    }

    Ok(value)
}

fn is_digits(s: &str, width: usize) -> bool {
    s.len() == width && s.bytes().all(|b| b.is_ascii_digit())
}

// f64::from_str also takes "inf", "NaN" and exponents; upstream amounts never use them.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let mut seen_digit = false;
    let mut seen_dot = false;

    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }

    seen_digit
}

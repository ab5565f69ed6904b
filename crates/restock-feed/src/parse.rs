//! Low-level field parsing for the product sheet: CSV record splitting and
//! per-field coercion.
//!
//! The splitter implements the quoted-CSV subset the published sheet can
//! produce: fields may be wrapped in double quotes, quoted fields may
//! contain commas, and a doubled quote inside a quoted field is a literal
//! quote. Embedded newlines inside quoted fields are not supported; the
//! sheet export never produces them. See [`crate::normalize`] for how these
//! helpers compose into full record mapping.

use crate::normalize::SkipReason;

/// Splits one CSV record into its fields.
///
/// Handles unquoted fields, quoted fields with embedded commas, and doubled
/// quotes (`""` → `"`) inside quoted fields. A quote that appears mid-field
/// in unquoted context is kept as a literal character.
#[must_use]
pub(crate) fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
            }
            _ => {
                field.push(c);
                at_field_start = false;
            }
        }
    }
    fields.push(field);
    fields
}

/// Parses the 1–10 condition grade. Empty input defaults to `0` (an absent
/// column is not a malformed value); anything else must be an integer.
pub(crate) fn parse_condition(value: &str) -> Result<u8, SkipReason> {
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<u8>()
        .map_err(|_| SkipReason::InvalidNumber {
            field: "condition",
            value: value.to_owned(),
        })
}

/// Parses the price in major currency units. Empty input defaults to `0.0`;
/// a non-numeric or negative value rejects the row instead of letting a NaN
/// or nonsense price reach the catalog.
pub(crate) fn parse_price(value: &str) -> Result<f64, SkipReason> {
    if value.is_empty() {
        return Ok(0.0);
    }
    let invalid = || SkipReason::InvalidNumber {
        field: "price",
        value: value.to_owned(),
    };
    let price = value.parse::<f64>().map_err(|_| invalid())?;
    // `>= 0.0` is false for NaN, so this also rejects a literal "NaN" cell.
    if price >= 0.0 {
        Ok(price)
    } else {
        Err(invalid())
    }
}

/// Parses a sheet boolean: `"true"`/`"1"` (case-insensitive) are true,
/// `"false"`/`"0"`/empty are false. Any other string rejects the row rather
/// than silently coercing to false.
pub(crate) fn parse_flag(field: &'static str, value: &str) -> Result<bool, SkipReason> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(SkipReason::InvalidBool {
            field,
            value: value.to_owned(),
        }),
    }
}

/// Splits the pipe-delimited gallery field into an ordered image list.
/// Empty input yields an empty list; blank segments are dropped.
#[must_use]
pub(crate) fn split_images(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

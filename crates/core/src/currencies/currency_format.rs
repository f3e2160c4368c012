use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{Error, Result};

lazy_static! {
    /// Format: ^[A-Z]{3}$ (ISO-style currency code)
    static ref CURRENCY_CODE_REGEX: Regex =
        Regex::new(r"^[A-Z]{3}$").expect("Invalid regex pattern");
}

/// Returns true if `value` is exactly three uppercase ASCII letters.
pub fn is_well_formed(value: &str) -> bool {
    CURRENCY_CODE_REGEX.is_match(value)
}

/// Checks the raw currency value supplied for `field_label`.
///
/// No case folding happens here: `"usd"` is rejected and echoed back as-is.
/// On success the validated value is handed back to the caller.
pub fn check_format<'a>(value: Option<&'a str>, field_label: &str) -> Result<&'a str> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            return Err(Error::InvalidCurrency(format!(
                "{} cannot be null or empty",
                field_label
            )))
        }
    };

    if !is_well_formed(value) {
        return Err(Error::InvalidCurrency(format!(
            "{} format is invalid: {}. Expected 3 uppercase letters",
            field_label, value
        )));
    }

    Ok(value)
}

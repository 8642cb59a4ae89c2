//! Input validators shared by the maintenance commands.
//!
//! SECURITY: item IDs and field names end up inside REST paths; validate
//! before building a URL from operator or environment input.

use chrono::NaiveDate;
use thiserror::Error;

/// Prefix every user-defined metadata field name carries.
pub const METADATA_FIELD_PREFIX: &str = "portal_mf";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommonError {
    #[error("Invalid Metadata Field Name '{0}'. It should be in the following format: portal_mfXXXXXX.")]
    InvalidMetadataField(String),

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: &'static str },

    #[error("Invalid item ID '{0}': expected letters, digits, '-' or '_'")]
    InvalidItemId(String),
}

/// Validate a metadata field name: `portal_mf` followed by exactly 6 digits.
pub fn validate_metadata_field(name: &str) -> Result<(), CommonError> {
    let valid = name
        .strip_prefix(METADATA_FIELD_PREFIX)
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_digit()));
    if valid {
        Ok(())
    } else {
        Err(CommonError::InvalidMetadataField(name.to_string()))
    }
}

/// Validate a date prefix: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
///
/// Components may only be omitted from the right, and every given component
/// must name a real calendar date.
pub fn validate_date_prefix(value: &str) -> Result<(), CommonError> {
    let invalid = |reason| CommonError::InvalidDate {
        value: value.to_string(),
        reason,
    };

    let parts: Vec<&str> = value.split('-').collect();
    let widths_ok = match parts.as_slice() {
        [y] => y.len() == 4,
        [y, m] => y.len() == 4 && m.len() == 2,
        [y, m, d] => y.len() == 4 && m.len() == 2 && d.len() == 2,
        _ => false,
    };
    if !widths_ok || !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
        return Err(invalid("expected YYYY, YYYY-MM or YYYY-MM-DD"));
    }

    let numbers: Vec<u32> = parts
        .iter()
        .map(|p| p.parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid("expected YYYY, YYYY-MM or YYYY-MM-DD"))?;
    let year = i32::try_from(numbers[0]).map_err(|_| invalid("year out of range"))?;
    let month = numbers.get(1).copied().unwrap_or(1);
    let day = numbers.get(2).copied().unwrap_or(1);

    if !(1..=12).contains(&month) {
        return Err(invalid("month must be between 01 and 12"));
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(invalid("day is out of range for month"));
    }
    Ok(())
}

/// Validate an item ID before it is placed in a REST path.
pub fn validate_item_id(id: &str) -> Result<(), CommonError> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CommonError::InvalidItemId(id.to_string()))
    }
}

use crate::utils::error::{KitError, Result};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const GENERIC_KIND: &str = "record";

/// Fails with [`KitError::ValidationFailure`] when `value` is empty.
///
/// Only the empty string counts as empty; whitespace is a value.
pub fn validate_field<I: Display>(record_id: I, value: &str, field_name: &str) -> Result<()> {
    check_field(GENERIC_KIND, &record_id, value, field_name)
}

/// Checks `(value, field_name)` pairs in order and stops at the first empty value.
pub fn validate_fields<I: Display>(record_id: I, fields: &[(&str, &str)]) -> Result<()> {
    validate_record_fields(GENERIC_KIND, record_id, fields)
}

/// Same as [`validate_fields`], naming the record `kind` (e.g. `"user"`) in the error.
pub fn validate_record_fields<I: Display>(
    kind: &str,
    record_id: I,
    fields: &[(&str, &str)],
) -> Result<()> {
    fields
        .iter()
        .try_for_each(|(value, field_name)| check_field(kind, &record_id, value, field_name))
}

fn check_field(kind: &str, record_id: &dyn Display, value: &str, field_name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(KitError::ValidationFailure {
            kind: kind.to_string(),
            record_id: record_id.to_string(),
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct(field_name: &str, left: char, right: char) -> Result<()> {
    if left == right {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: left.to_string(),
            reason: "Directory and extension separators must differ".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_field() {
        assert!(validate_field(7, "value", "Name").is_ok());
        assert!(validate_field(7, " ", "Name").is_ok());

        let err = validate_field(7, "", "Name").unwrap_err();
        assert_eq!(
            err,
            KitError::ValidationFailure {
                kind: "record".to_string(),
                record_id: "7".to_string(),
                field: "Name".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_fields_first_empty_wins() {
        let err = validate_fields(1, &[("", "Name"), ("", "Address")]).unwrap_err();
        assert_eq!(err.field(), Some("Name"));

        let err = validate_fields("u-9", &[("A", "Name"), ("", "Address"), ("", "Phone")])
            .unwrap_err();
        assert_eq!(err.to_string(), "Can't save record u-9: empty Address");
    }

    #[test]
    fn test_validate_record_fields_names_kind() {
        let err = validate_record_fields("order", 17, &[("2024-01-01", "Date"), ("", "Customer")])
            .unwrap_err();
        assert_eq!(err.to_string(), "Can't save order 17: empty Customer");

        assert!(validate_record_fields("order", 18, &[("x", "Date")]).is_ok());
    }

    #[test]
    fn test_validate_fields_all_present() {
        assert!(validate_fields(2, &[("A", "Name"), ("B", "Address")]).is_ok());
        assert!(validate_fields(3, &[]).is_ok());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("margin_marker", "|").is_ok());
        assert!(validate_non_empty_string("margin_marker", "  ").is_err());
    }

    #[test]
    fn test_validate_distinct() {
        assert!(validate_distinct("path", '/', '.').is_ok());
        assert!(validate_distinct("path", '/', '/').is_err());
    }
}

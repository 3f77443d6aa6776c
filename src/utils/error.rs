use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KitError {
    #[error("Can't save {kind} {record_id}: empty {field}")]
    ValidationFailure {
        kind: String,
        record_id: String,
        field: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),
}

impl KitError {
    /// 驗證失敗時對應的欄位名稱
    pub fn field(&self) -> Option<&str> {
        match self {
            KitError::ValidationFailure { field, .. } => Some(field.as_str()),
            KitError::InvalidConfigValueError { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KitError::ValidationFailure { field, .. } => {
                format!("Fill in the {} field and try again", field)
            }
            KitError::ConfigError { .. } => {
                "Check the configuration text for TOML syntax errors".to_string()
            }
            KitError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of {}", field)
            }
            KitError::PatternError(_) => "Check the regular expression syntax".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KitError::ValidationFailure {
                kind,
                record_id,
                field,
            } => {
                format!("The {} {} is missing a value for {}", kind, record_id, field)
            }
            KitError::ConfigError { message } => format!("Configuration problem: {}", message),
            KitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting {} is invalid: {}", field, reason)
            }
            KitError::PatternError(e) => format!("Pattern could not be compiled: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_message() {
        let err = KitError::ValidationFailure {
            kind: "user".to_string(),
            record_id: "1".to_string(),
            field: "Name".to_string(),
        };
        assert_eq!(err.to_string(), "Can't save user 1: empty Name");
        assert_eq!(err.field(), Some("Name"));
        assert!(err.recovery_suggestion().contains("Name"));
        assert_eq!(
            err.user_friendly_message(),
            "The user 1 is missing a value for Name"
        );
    }

    #[test]
    fn test_pattern_error_from_regex() {
        let err: KitError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, KitError::PatternError(_)));
        assert_eq!(err.field(), None);
    }
}

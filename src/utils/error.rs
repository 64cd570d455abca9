use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripletError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl TripletError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Failed to render the report".to_string()
            }
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' has an invalid value '{}': {}", field, value, reason)
            }
            Self::MissingConfigError { field } => format!("'{}' is required", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the file exists and is readable",
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different --format or check that stdout is writable"
            }
            Self::ConfigError { .. } => {
                "Make sure the case file is valid TOML with [suite] and [[cases]] tables"
            }
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Fix the highlighted field and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TripletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TripletError::InvalidConfigValueError {
            field: "cases[0].expected[1]".to_string(),
            value: "[1, -1]".to_string(),
            reason: "a triplet needs exactly 3 values".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(
            err.to_string(),
            "Invalid value '[1, -1]' for 'cases[0].expected[1]': a triplet needs exactly 3 values"
        );
        assert!(err.user_friendly_message().contains("cases[0].expected[1]"));
        assert_eq!(err.recovery_suggestion(), "Fix the highlighted field and run again");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: TripletError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_config_error());
        assert!(err.to_string().starts_with("IO error"));
    }
}

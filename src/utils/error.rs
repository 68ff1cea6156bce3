use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid query parameter '{field}' = '{value}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Dataset error: {message}")]
    DatasetError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Dataset,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn invalid_parameter(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } => ErrorCategory::Validation,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::DatasetError { .. }
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::HttpError(_) => ErrorCategory::Dataset,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 請求被拒絕，但程序本身沒有問題
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Dataset => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidParameter { field, reason, .. } => {
                format!("The '{}' parameter was rejected: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            Self::DatasetError { message } => format!("Could not load the directory: {}", message),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Directory data is not valid JSON: {}", e),
            Self::CsvError(e) => format!("Directory data is not valid CSV: {}", e),
            Self::HttpError(e) => format!("Could not fetch the directory: {}", e),
            Self::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => match field.as_str() {
                "limit" => "Pass a positive whole number for limit, or omit it to use the default",
                "cursor" => "Pass a non-negative whole number for cursor, or omit it to start at 0",
                "minYears" => "Pass a non-negative whole number for minYears, or 0 to disable it",
                _ => "Check the query parameters and try again",
            },
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::TomlError(_) => "Review the configuration file and command line flags",
            Self::DatasetError { .. } | Self::SerializationError(_) | Self::CsvError(_) => {
                "Make sure the dataset is a JSON array of advocates or a CSV file with a header row"
            }
            Self::HttpError(_) => "Check that the dataset URL is reachable",
            Self::IoError(_) => "Check that the file exists and is readable",
        }
    }
}

/// JSON body for a rejected request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub reason: String,
}

impl From<&DirectoryError> for ErrorResponse {
    fn from(err: &DirectoryError) -> Self {
        match err {
            DirectoryError::InvalidParameter {
                field,
                value,
                reason,
            } => Self {
                error: "invalid_parameter",
                field: Some(field.clone()),
                value: Some(value.clone()),
                reason: reason.clone(),
            },
            other => Self {
                error: "internal_error",
                field: None,
                value: None,
                reason: other.user_friendly_message(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_low_severity() {
        let err = DirectoryError::invalid_parameter("limit", "0", "must be at least 1");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.is_validation());
        assert!(err.recovery_suggestion().contains("limit"));
    }

    #[test]
    fn test_error_response_body() {
        let err = DirectoryError::invalid_parameter("cursor", "-1", "must be a non-negative integer");
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["error"], "invalid_parameter");
        assert_eq!(body["field"], "cursor");
        assert_eq!(body["value"], "-1");

        let err = DirectoryError::DatasetError {
            message: "empty".to_string(),
        };
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["error"], "internal_error");
        assert!(body.get("field").is_none());
    }
}

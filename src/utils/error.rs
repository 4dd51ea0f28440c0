use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Source returned status {status} for {endpoint}")]
    SourceError { endpoint: String, status: u16 },

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Config,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::ApiError(_) | ReportError::SourceError { .. } => ErrorCategory::Network,
            ReportError::IoError(_) => ErrorCategory::Io,
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorCategory::Config,
            ReportError::CsvError(_) | ReportError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 資料來源失敗代表整次執行必須中止
            ReportError::ApiError(_) | ReportError::SourceError { .. } => ErrorSeverity::Medium,
            ReportError::IoError(_) => ErrorSeverity::High,
            ReportError::ConfigValidationError { .. }
            | ReportError::InvalidConfigValueError { .. }
            | ReportError::MissingConfigError { .. } => ErrorSeverity::Critical,
            ReportError::CsvError(_) | ReportError::SerializationError(_) => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::ApiError(e) => format!("Could not reach the data source: {}", e),
            ReportError::SourceError { endpoint, status } => {
                format!("The data source rejected the request ({} on {})", status, endpoint)
            }
            ReportError::CsvError(e) => format!("Failed to produce CSV output: {}", e),
            ReportError::IoError(e) => format!("Failed to write the report: {}", e),
            ReportError::SerializationError(e) => format!("Failed to encode the report: {}", e),
            ReportError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            ReportError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            ReportError::MissingConfigError { field } => {
                format!("Required configuration field '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the report server is running and the endpoint is reachable".to_string()
            }
            ErrorCategory::Io => "Check the output path and filesystem permissions".to_string(),
            ErrorCategory::Config => {
                "Fix the configuration value and run again (--help lists the options)".to_string()
            }
            ErrorCategory::Data => {
                "The server response did not match the expected shape; verify the API version"
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_critical() {
        let err = ReportError::MissingConfigError {
            field: "source.endpoint".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_source_error_is_network() {
        let err = ReportError::SourceError {
            endpoint: "http://localhost:8000/employees".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.user_friendly_message().contains("503"));
    }
}

use thiserror::Error;

/// 找不到名稱時回給呼叫端的固定訊息
pub const MISSING_NAME_MESSAGE: &str =
    "Please pass a name on the query string or in the request body";

#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("{}", MISSING_NAME_MESSAGE)]
    MissingName,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Blob write failed for '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("Invalid event payload: {message}")]
    PayloadError { message: String },

    #[error("Unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },
}

impl FunctionError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FunctionError::MissingName => "Add ?name=... to the query string or send a request body",
            FunctionError::IoError(_) => "Check that the path exists and is writable",
            FunctionError::SerializationError(_) | FunctionError::PayloadError { .. } => {
                "Send a JSON array of strings or of {\"body\": ...} objects"
            }
            FunctionError::ConfigError { .. }
            | FunctionError::ConfigValidationError { .. }
            | FunctionError::InvalidConfigValueError { .. }
            | FunctionError::MissingConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
            FunctionError::StorageError { .. } => "Check the blob output directory and retry the batch",
            FunctionError::UnsupportedMethod { .. } => "Use GET or POST",
        }
    }
}

pub type Result<T> = std::result::Result<T, FunctionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_message() {
        assert_eq!(FunctionError::MissingName.to_string(), MISSING_NAME_MESSAGE);
    }

    #[test]
    fn test_storage_error_display() {
        let err = FunctionError::StorageError {
            key: "eventhub-output/a.txt".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Blob write failed for 'eventhub-output/a.txt': disk full"
        );
        assert!(!err.recovery_suggestion().is_empty());
    }
}

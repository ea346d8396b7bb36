//! Error types module
//!
//! All errors are unified under the `AppError` enum. The generation entry
//! point collapses every kind to a single logged failure, but the kinds stay
//! distinct so callers that want finer handling can match on them.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Write failed for {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InputNotFound(_) => "InputNotFound",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Configuration(_) => "Configuration",
            AppError::WriteFailed { .. } => "WriteFailed",
            AppError::Internal(_) => "Internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_names() {
        let err = AppError::InputNotFound("product.json".to_string());
        assert_eq!(err.error_type(), "InputNotFound");

        let err = AppError::Configuration("missing template".to_string());
        assert_eq!(err.error_type(), "Configuration");
    }

    #[test]
    fn test_json_error_maps_to_invalid_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = AppError::from(json_err);
        assert_eq!(err.error_type(), "InvalidInput");
        assert!(err.to_string().contains("JSON parsing error"));
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let err = AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.error_type(), "Internal");
    }

    #[test]
    fn test_write_failed_display_includes_path() {
        let err = AppError::WriteFailed {
            path: "mockup_data_p1.json".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert!(err.to_string().contains("mockup_data_p1.json"));
    }
}

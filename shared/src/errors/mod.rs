//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not usable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// A single rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error body returned by every endpoint
///
/// ```json
/// {
///   "status": 400,
///   "error": "Bad Request",
///   "message": "姓名為必填欄位",
///   "timestamp": "2024-01-15T10:30:00Z",
///   "path": "/api/contacts",
///   "validationErrors": [{ "field": "name", "message": "姓名為必填欄位" }]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,

    /// HTTP reason phrase
    pub error: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,

    /// Request path that failed
    pub path: String,

    /// Field level failures, present for validation errors only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
            path: path.into(),
            validation_errors: None,
        }
    }

    /// Attach field level failures
    pub fn with_validation_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.validation_errors = Some(errors);
        self
    }
}

/// Reason phrases used in `ErrorResponse::error`
pub mod reasons {
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const NOT_FOUND: &str = "Not Found";
    pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serializes_camel_case() {
        let response = ErrorResponse::new(400, reasons::BAD_REQUEST, "姓名為必填欄位", "/api/contacts")
            .with_validation_errors(vec![FieldError::new("name", "姓名為必填欄位")]);

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Bad Request");
        assert_eq!(json["path"], "/api/contacts");
        assert_eq!(json["validationErrors"][0]["field"], "name");
        assert!(json.get("validation_errors").is_none());
    }

    #[test]
    fn test_validation_errors_omitted_when_absent() {
        let response = ErrorResponse::new(404, reasons::NOT_FOUND, "聯絡人不存在: 9", "/api/contacts/9");

        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("validationErrors").is_none());
        assert!(json["timestamp"].is_string());
    }
}

//! Error types for BIG-IP operations.
//!
//! This module provides the error hierarchy shared by every resource binding,
//! including HTTP status triage and the structured error body the device
//! returns on failed requests.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for BIG-IP operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Client or device configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A request URL could not be constructed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// An object path (`/Partition/Name`) could not be parsed
    #[error("Invalid object path: {0}")]
    InvalidObjectPath(String),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// The request timed out
    #[error("Timeout talking to device: {0}")]
    Timeout(String),

    /// The management endpoint is unreachable or overloaded
    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),

    /// Authentication was rejected by the device
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The addressed configuration object does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request conflicts with existing device configuration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Structured error reported by the iControl REST layer
    #[error("Device error {code}: {message}")]
    DeviceError {
        /// Numeric error code from the response body
        code: i64,
        /// Message from the response body
        message: String,
    },

    /// A response body could not be decoded
    #[error("Failed to parse device response: {0}")]
    ParseError(String),
}

/// Specialized result type for BIG-IP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body shape used by the iControl REST layer on non-2xx responses.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeviceErrorBody {
    /// Numeric error code (usually mirrors the HTTP status)
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Stack of nested error strings, often empty
    #[serde(default, rename = "errorStack")]
    pub error_stack: Vec<String>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::InvalidObjectPath(_) => "INVALID_OBJECT_PATH",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::DeviceUnavailable(_) => "DEVICE_UNAVAILABLE",
            Self::AuthFailed(_) => "AUTH_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::DeviceError { .. } => "DEVICE_ERROR",
            Self::ParseError(_) => "PARSE_ERROR",
        }
    }

    /// Build an error from a failed response body.
    ///
    /// The iControl REST layer usually answers with a JSON body carrying
    /// `code` and `message`; when that parses, the structured variant is
    /// returned, otherwise the raw text is kept.
    #[must_use]
    pub fn from_device_body(text: &str) -> Self {
        match serde_json::from_str::<DeviceErrorBody>(text) {
            Ok(DeviceErrorBody {
                code: Some(code),
                message: Some(message),
                ..
            }) => Self::DeviceError { code, message },
            _ => Self::HttpError(text.to_string()),
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::DeviceUnavailable(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::InvalidEndpoint("test".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
        assert_eq!(
            Error::InvalidObjectPath("test".to_string()).error_code(),
            "INVALID_OBJECT_PATH"
        );
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::DeviceUnavailable("test".to_string()).error_code(),
            "DEVICE_UNAVAILABLE"
        );
        assert_eq!(
            Error::AuthFailed("test".to_string()).error_code(),
            "AUTH_FAILED"
        );
        assert_eq!(
            Error::NotFound("test".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(Error::Conflict("test".to_string()).error_code(), "CONFLICT");
        assert_eq!(
            Error::DeviceError {
                code: 400,
                message: "bad".to_string()
            }
            .error_code(),
            "DEVICE_ERROR"
        );
        assert_eq!(
            Error::ParseError("test".to_string()).error_code(),
            "PARSE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("/Common/web-pool".to_string());
        assert_eq!(err.to_string(), "Not found: /Common/web-pool");

        let err = Error::DeviceError {
            code: 409,
            message: "object already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Device error 409: object already exists");
    }

    #[test]
    fn test_from_device_body_structured() {
        let text = r#"{"code":400,"message":"invalid monitor","errorStack":[],"apiError":3}"#;
        let err = Error::from_device_body(text);
        assert_eq!(
            err,
            Error::DeviceError {
                code: 400,
                message: "invalid monitor".to_string()
            }
        );
    }

    #[test]
    fn test_from_device_body_plain_text() {
        let err = Error::from_device_body("<html>gateway error</html>");
        assert!(matches!(err, Error::HttpError(_)));
    }

    #[test]
    fn test_from_device_body_partial_json() {
        // A JSON body without a message falls back to the raw text.
        let err = Error::from_device_body(r#"{"code":500}"#);
        assert!(matches!(err, Error::HttpError(_)));
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let bigip_err: Error = err.into();
        assert!(matches!(bigip_err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let bigip_err: Error = err.into();
        assert!(matches!(bigip_err, Error::ParseError(_)));
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = Error::NotFound("test".to_string());
        assert_eq!(err, err.clone());
        assert_ne!(err, Error::NotFound("other".to_string()));
    }

    #[test]
    fn test_device_error_body_deserialization() {
        let body: DeviceErrorBody = serde_json::from_str(
            r#"{"code":404,"message":"01020036:3: The requested Pool (/Common/p) was not found.","errorStack":["a","b"]}"#,
        )
        .unwrap();
        assert_eq!(body.code, Some(404));
        assert_eq!(body.error_stack.len(), 2);
    }
}

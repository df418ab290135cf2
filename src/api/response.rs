//! Response types for the Cost Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", id),
                    format!("No employee with id '{}' exists in the roster", id),
                ),
            },
            EngineError::ClientNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "CLIENT_NOT_FOUND",
                    format!("Client not found: {}", code),
                    format!("No client with code '{}' exists in the directory", code),
                ),
            },
            EngineError::InvalidAmount {
                field,
                value,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}': {}", field, message),
                    format!("Received {}", value),
                ),
            },
            EngineError::InvalidQuote { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_QUOTE",
                    format!("Invalid quote: {}", message),
                    "The quote data contains invalid information",
                ),
            },
            EngineError::InvalidDuration { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DURATION",
                    format!("Invalid duration '{}': {}", value, message),
                    "Durations are written as H:MM",
                ),
            },
        }
    }
}

/// Average base salary of the employees holding a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSalaryResponse {
    /// The role that was queried.
    pub role: String,
    /// Number of employees holding the role.
    pub employee_count: usize,
    /// Average base salary; zero when nobody holds the role.
    pub average_salary: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_employee_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::EmployeeNotFound {
            id: "func_999".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "EMPLOYEE_NOT_FOUND");
        assert!(api_error.error.message.contains("func_999"));
    }

    #[test]
    fn test_invalid_amount_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidAmount {
            field: "total_budget".to_string(),
            value: Decimal::new(-1, 0),
            message: "must not be negative".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_AMOUNT");
        assert_eq!(api_error.error.details.as_deref(), Some("Received -1"));
    }

    #[test]
    fn test_invalid_duration_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidDuration {
            value: "abc".to_string(),
            message: "expected H:MM".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DURATION");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "policy.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}

//! `AppError` and the `ApiResponse` envelope

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Request-level error: a numeric code, a message for the dashboard and
/// optional structured details (offending input, field names)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Reservation errors ====================

    /// `input` is echoed back under `details.input`
    pub fn invalid_time(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::with_message(
            ErrorCode::InvalidTimeFormat,
            format!("Invalid time format: {input}. Expected HH:mm or HH:mm:ss"),
        )
        .with_detail("input", input)
    }

    pub fn invalid_party_size(size: u32) -> Self {
        Self::new(ErrorCode::InvalidPartySize).with_detail("party_size", size)
    }

    // ==================== System errors ====================

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StorageError, msg)
    }
}

/// JSON envelope returned by every timeline endpoint
///
/// `code` is 0 on success; `details` only appears on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(ErrorCode::Success.code()),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(err: &AppError) -> Self {
        err.clone().into()
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        } else {
            tracing::debug!(code = %self.code, message = %self.message, "Request rejected");
        }

        (status, Json(ApiResponse::<()>::from(self))).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = match self.code {
            None | Some(0) => StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::TableNotFound);
        assert_eq!(err.message, "Table not found");
        assert!(err.details.is_none());
        assert_eq!(err.to_string(), "Table not found");
    }

    #[test]
    fn test_with_detail_accumulates() {
        let err = AppError::with_message(ErrorCode::InvalidFormat, "Missing reservationTime")
            .with_detail("field", "reservationTime")
            .with_detail("reason", "required");

        let details = err.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["field"], "reservationTime");
    }

    #[test]
    fn test_invalid_time_keeps_input() {
        let err = AppError::invalid_time("25:xx");
        assert_eq!(err.code, ErrorCode::InvalidTimeFormat);
        assert!(err.message.contains("25:xx"));
        assert_eq!(err.details.unwrap()["input"], "25:xx");
        assert_eq!(
            AppError::invalid_time("x").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_envelope() {
        let response = ApiResponse::<()>::error(&AppError::invalid_party_size(0));

        assert_eq!(response.code, Some(4003));
        assert_eq!(response.message, "Party size must be between 1 and 20");
        assert!(response.data.is_none());
        assert_eq!(response.details.unwrap()["party_size"], 0);
    }

    #[test]
    fn test_storage_error_is_system() {
        let response: ApiResponse<String> = AppError::storage("disk full").into();
        assert_eq!(response.code, Some(9003));
        assert_eq!(response.message, "disk full");
    }

    #[test]
    fn test_success_serialization() {
        let json = serde_json::to_string(&ApiResponse::success("hello")).unwrap();
        assert_eq!(json, r#"{"code":0,"message":"OK","data":"hello"}"#);
    }
}

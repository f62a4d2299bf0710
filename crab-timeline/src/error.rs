//! Error types for the timeline library

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Timeline error types
///
/// Layout itself never fails; these come from strict validation paths
/// (availability queries) and preference persistence.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// Time string is neither `HH:mm[:ss]` nor an ISO timestamp
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Party size outside the bookable range
    #[error("Invalid party size: {0}")]
    InvalidPartySize(u32),

    /// IO error while reading or writing preferences
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences file is not valid JSON
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;

impl From<TimelineError> for AppError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::InvalidTime(input) => AppError::invalid_time(input),
            TimelineError::InvalidPartySize(size) => AppError::invalid_party_size(size),
            TimelineError::Io(e) => AppError::storage(e.to_string()),
            TimelineError::Serde(e) => AppError::with_message(ErrorCode::InvalidFormat, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_app_error() {
        let err: AppError = TimelineError::InvalidTime("abc".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidTimeFormat);

        let err: AppError = TimelineError::InvalidPartySize(21).into();
        assert_eq!(err.code, ErrorCode::InvalidPartySize);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = TimelineError::from(io).into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}

//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the dashboard can match
/// on them without parsing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Malformed payload (e.g. a corrupt preferences file)
    InvalidFormat = 6,

    // ==================== 4xxx: Reservation ====================
    /// Time string could not be parsed
    InvalidTimeFormat = 4002,
    /// Party size outside the accepted range
    InvalidPartySize = 4003,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// No table can host the requested slot
    NoTableAvailable = 7002,

    // ==================== 9xxx: System ====================
    /// File system or storage error
    StorageError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",

            ErrorCode::InvalidTimeFormat => "Invalid time format, expected HH:mm or HH:mm:ss",
            ErrorCode::InvalidPartySize => "Party size must be between 1 and 20",

            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::NoTableAvailable => "No tables available for selected time",

            ErrorCode::StorageError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),
            4002 => Ok(ErrorCode::InvalidTimeFormat),
            4003 => Ok(ErrorCode::InvalidPartySize),
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::NoTableAvailable),
            9003 => Ok(ErrorCode::StorageError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

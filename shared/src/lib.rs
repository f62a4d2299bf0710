//! Shared types for the reservation timeline
//!
//! Domain models exchanged with the admin dashboard and the unified
//! error/response types used by every crate in the workspace.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{DiningTable, Reservation, ReservationStatus};

//! Data models
//!
//! Shared between the layout engine and the dashboard (via API).
//! JSON field names are camelCase, matching what the reservation backend sends.
//! All IDs are `i64`.

pub mod dining_table;
pub mod reservation;

// Re-exports
pub use dining_table::*;
pub use reservation::*;

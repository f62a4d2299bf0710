//! # crab-timeline
//!
//! Reservation timeline layout engine - the maths behind the Gantt view.
//!
//! ## Scope
//!
//! This crate handles WHERE reservations go:
//! - Wall-clock time ⇄ minutes ⇄ pixel offsets on the business-hours axis
//! - Same-table overlap detection (half-open intervals)
//! - Greedy track assignment so overlapping bars render in parallel lanes
//! - Per-table row layout, table availability, view preferences
//!
//! Drawing the bars (HOW they look) belongs to the dashboard.
//!
//! ## Example
//!
//! ```
//! use crab_timeline::{TimelineConfig, assign_tracks};
//! use shared::models::Reservation;
//!
//! let reservations = vec![
//!     Reservation::new(1, 1, "18:00", 90),
//!     Reservation::new(2, 1, "18:30", 60),
//!     Reservation::new(3, 1, "19:30", 30),
//! ];
//!
//! let tracks = assign_tracks(&reservations);
//! assert_eq!(tracks.get(1), Some(0));
//! assert_eq!(tracks.get(2), Some(1));
//! assert_eq!(tracks.get(3), Some(0));
//! assert_eq!(tracks.track_count(), 2);
//!
//! let config = TimelineConfig::default();
//! assert_eq!(config.pixel_to_time(0.0), "09:00");
//! ```

mod availability;
mod config;
mod error;
mod layout;
mod overlap;
mod session;
mod time;
mod tracks;

// Re-exports
pub use availability::{
    AvailabilityQuery, MAX_PARTY_SIZE, MIN_PARTY_SIZE, available_tables, suggest_table,
};
pub use config::TimelineConfig;
pub use error::{TimelineError, TimelineResult};
pub use layout::{ReservationBar, TableRow, TimelineLayout, floors, group_by_table};
pub use overlap::{Interval, overlaps, overlaps_window};
pub use session::{ViewMode, ViewPreferences};
pub use time::{end_minutes, end_time, minutes_to_time, parse_time_minutes, time_to_minutes};
pub use tracks::{TrackAssignment, assign_tracks};

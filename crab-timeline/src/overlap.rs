//! Overlap detection
//!
//! Reservations occupy half-open intervals `[start, start + duration)`: a
//! booking ending at 19:30 does not collide with one starting at 19:30.

use shared::models::Reservation;

use crate::time::{end_minutes, time_to_minutes};

/// Half-open minute interval on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, duration: u32) -> Self {
        Self {
            start,
            end: end_minutes(start, duration),
        }
    }

    /// Interval covered by a reservation
    pub fn of(reservation: &Reservation) -> Self {
        Self::new(time_to_minutes(&reservation.reservation_time), reservation.duration)
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Whether two reservations collide on the same table
///
/// Different tables never overlap.
pub fn overlaps(a: &Reservation, b: &Reservation) -> bool {
    if a.table_id != b.table_id {
        return false;
    }
    Interval::of(a).overlaps(&Interval::of(b))
}

/// Whether a reservation collides with a requested window (same table assumed)
pub fn overlaps_window(reservation: &Reservation, start: i32, duration: u32) -> bool {
    Interval::of(reservation).overlaps(&Interval::new(start, duration))
}

//! Track assignment
//!
//! Overlapping reservations on one table are stacked into lanes ("tracks")
//! instead of drawing on top of each other. Greedy first-fit in start-time
//! order, which is optimal for interval graphs: the number of tracks equals
//! the largest set of mutually overlapping reservations.
//!
//! O(n²) per table. n is the handful of bookings a table gets in a day.

use std::borrow::Borrow;
use std::collections::HashMap;

use shared::models::Reservation;

use crate::overlap::Interval;

/// Track number per reservation for one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackAssignment {
    /// Track of each input reservation, in input order
    tracks: Vec<u32>,
    by_id: HashMap<i64, u32>,
    track_count: u32,
}

impl TrackAssignment {
    /// Track assigned to a reservation id
    pub fn get(&self, reservation_id: i64) -> Option<u32> {
        self.by_id.get(&reservation_id).copied()
    }

    /// Track of the reservation at `index` in the input list
    pub fn track_at(&self, index: usize) -> Option<u32> {
        self.tracks.get(index).copied()
    }

    /// Number of tracks in use (max track + 1), 0 when empty
    pub fn track_count(&self) -> u32 {
        self.track_count
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks in input order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.tracks.iter().copied()
    }
}

/// Assign every reservation the lowest track it does not collide on
///
/// Meant for the reservations of one table. Reservations of different
/// tables never collide, so a mixed list still yields a valid (if wasteful)
/// assignment.
///
/// Deterministic: processing order is start time ascending, ties keep input
/// order.
pub fn assign_tracks<R: Borrow<Reservation>>(reservations: &[R]) -> TrackAssignment {
    let reservations: Vec<&Reservation> = reservations
        .iter()
        .map(<R as Borrow<Reservation>>::borrow)
        .collect();
    let intervals: Vec<Interval> = reservations.iter().map(|r| Interval::of(r)).collect();

    let mut order: Vec<usize> = (0..reservations.len()).collect();
    // stable: equal start times keep input order
    order.sort_by_key(|&i| intervals[i].start);

    // lanes[t] holds the indices already placed on track t
    let mut lanes: Vec<Vec<usize>> = Vec::new();
    let mut tracks = vec![0u32; reservations.len()];

    for &i in &order {
        let current = reservations[i];
        let fits = |lane: &Vec<usize>| {
            lane.iter().all(|&j| {
                reservations[j].table_id != current.table_id
                    || !intervals[j].overlaps(&intervals[i])
            })
        };

        let track = match lanes.iter().position(fits) {
            Some(track) => track,
            None => {
                lanes.push(Vec::new());
                lanes.len() - 1
            }
        };
        lanes[track].push(i);
        tracks[i] = track as u32;
    }

    let by_id = reservations
        .iter()
        .zip(&tracks)
        .map(|(r, &t)| (r.reservation_id, t))
        .collect();

    tracing::trace!(
        reservations = reservations.len(),
        tracks = lanes.len(),
        "Assigned reservation tracks"
    );

    TrackAssignment {
        tracks,
        by_id,
        track_count: lanes.len() as u32,
    }
}

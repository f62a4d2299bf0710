//! Table availability
//!
//! Which tables can take a new booking at a given time, and which one to
//! suggest. Unlike the render path, bad input is rejected here: a booking
//! at an unparseable time must not silently land at midnight.

use serde::{Deserialize, Serialize};
use shared::models::{DEFAULT_DURATION_MINUTES, DiningTable, Reservation};

use crate::error::{TimelineError, TimelineResult};
use crate::overlap::overlaps_window;
use crate::time::parse_time_minutes;

pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 20;

/// Availability request for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// Requested start, `HH:mm[:ss]` or ISO
    pub time: String,
    #[serde(default = "default_duration")]
    pub duration: u32,
    pub party_size: u32,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub section: Option<String>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

impl AvailabilityQuery {
    pub fn new(time: impl Into<String>, party_size: u32) -> Self {
        Self {
            time: time.into(),
            duration: DEFAULT_DURATION_MINUTES,
            party_size,
            floor: None,
            section: None,
        }
    }

    /// Check party size and parse the start time
    pub fn validate(&self) -> TimelineResult<i32> {
        if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&self.party_size) {
            return Err(TimelineError::InvalidPartySize(self.party_size));
        }
        parse_time_minutes(&self.time).ok_or_else(|| TimelineError::InvalidTime(self.time.clone()))
    }

    fn matches_table(&self, table: &DiningTable) -> bool {
        table.is_active
            && table.fits_party(self.party_size)
            && self.floor.is_none_or(|f| table.floor == f)
            && self
                .section
                .as_deref()
                .is_none_or(|s| table.section.as_deref() == Some(s))
    }
}

/// Tables that fit the party and have no active reservation in the window
///
/// `reservations` is the day's list; completed, cancelled and no-show
/// bookings do not block a table. Ordered by capacity, then table number.
pub fn available_tables<'a>(
    tables: &'a [DiningTable],
    reservations: &[Reservation],
    query: &AvailabilityQuery,
) -> TimelineResult<Vec<&'a DiningTable>> {
    let start = query.validate()?;

    let mut available: Vec<&DiningTable> = tables
        .iter()
        .filter(|table| query.matches_table(table))
        .filter(|table| {
            !reservations.iter().any(|r| {
                r.table_id == table.table_id
                    && r.status.is_active()
                    && overlaps_window(r, start, query.duration)
            })
        })
        .collect();
    // smallest fitting table first
    available.sort_by(|a, b| {
        a.capacity
            .cmp(&b.capacity)
            .then_with(|| a.table_number.cmp(&b.table_number))
    });

    tracing::debug!(
        time = %query.time,
        party_size = query.party_size,
        candidates = tables.len(),
        available = available.len(),
        "Checked table availability"
    );

    Ok(available)
}

/// Pick a table for auto-assignment
///
/// The preferred table wins when it is available; otherwise the table whose
/// capacity is closest to the party size (first one on ties).
pub fn suggest_table<'a>(
    available: &[&'a DiningTable],
    party_size: u32,
    preferred_table_id: Option<i64>,
) -> Option<&'a DiningTable> {
    if let Some(preferred) = preferred_table_id
        && let Some(table) = available.iter().find(|t| t.table_id == preferred)
    {
        return Some(*table);
    }

    available
        .iter()
        .copied()
        .min_by_key(|t| t.capacity.abs_diff(party_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ReservationStatus;

    fn table(id: i64, capacity: u32, floor: i32, section: Option<&str>) -> DiningTable {
        DiningTable {
            table_id: id,
            table_number: format!("T{id}"),
            capacity,
            min_capacity: None,
            floor,
            section: section.map(str::to_string),
            is_active: true,
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(AvailabilityQuery::new("18:00", 2).validate().unwrap(), 1080);
        assert!(matches!(
            AvailabilityQuery::new("18:00", 0).validate(),
            Err(TimelineError::InvalidPartySize(0))
        ));
        assert!(matches!(
            AvailabilityQuery::new("18:00", 21).validate(),
            Err(TimelineError::InvalidPartySize(21))
        ));
        assert!(matches!(
            AvailabilityQuery::new("dinner", 2).validate(),
            Err(TimelineError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_capacity_and_overlap_filtering() {
        let tables = vec![
            table(1, 2, 1, None),
            table(2, 4, 1, None),
            table(3, 6, 1, None),
        ];
        let reservations = vec![Reservation::new(1, 2, "18:00", 120)];

        let query = AvailabilityQuery::new("19:00", 3);
        let ids: Vec<i64> = available_tables(&tables, &reservations, &query)
            .unwrap()
            .iter()
            .map(|t| t.table_id)
            .collect();
        // Table 1 too small, table 2 busy until 20:00
        assert_eq!(ids, vec![3]);

        let query = AvailabilityQuery::new("20:00", 3);
        let ids: Vec<i64> = available_tables(&tables, &reservations, &query)
            .unwrap()
            .iter()
            .map(|t| t.table_id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_inactive_reservations_do_not_block() {
        let tables = vec![table(1, 4, 1, None)];
        let query = AvailabilityQuery::new("18:30", 2);

        for status in [
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
            ReservationStatus::NoShow,
        ] {
            let reservations = vec![Reservation::new(1, 1, "18:00", 120).with_status(status)];
            assert_eq!(available_tables(&tables, &reservations, &query).unwrap().len(), 1);
        }

        let reservations =
            vec![Reservation::new(1, 1, "18:00", 120).with_status(ReservationStatus::Seated)];
        assert!(available_tables(&tables, &reservations, &query).unwrap().is_empty());
    }

    #[test]
    fn test_floor_section_min_capacity() {
        let mut big = table(3, 10, 2, Some("terrace"));
        big.min_capacity = Some(6);
        let tables = vec![table(1, 4, 1, Some("hall")), table(2, 4, 2, Some("terrace")), big];

        let mut query = AvailabilityQuery::new("12:00", 4);
        query.floor = Some(2);
        let ids: Vec<i64> = available_tables(&tables, &[], &query)
            .unwrap()
            .iter()
            .map(|t| t.table_id)
            .collect();
        // Table 3 requires at least 6 guests
        assert_eq!(ids, vec![2]);

        query.floor = None;
        query.section = Some("hall".into());
        let ids: Vec<i64> = available_tables(&tables, &[], &query)
            .unwrap()
            .iter()
            .map(|t| t.table_id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_ordered_by_capacity_then_number() {
        let mut tables = vec![
            table(1, 6, 1, None),
            table(2, 4, 1, None),
            table(3, 4, 1, None),
            table(4, 2, 1, None),
        ];
        tables[1].table_number = "B".into();
        tables[2].table_number = "A".into();

        let ids: Vec<i64> = available_tables(&tables, &[], &AvailabilityQuery::new("12:00", 2))
            .unwrap()
            .iter()
            .map(|t| t.table_id)
            .collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_suggest_table() {
        let tables = vec![table(1, 8, 1, None), table(2, 4, 1, None), table(3, 4, 1, None)];
        let mut available: Vec<&DiningTable> = tables.iter().collect();

        assert_eq!(suggest_table(&available, 3, None).unwrap().table_id, 2);
        assert_eq!(suggest_table(&available, 3, Some(1)).unwrap().table_id, 1);
        // Unavailable preference falls back to closest capacity
        assert_eq!(suggest_table(&available, 7, Some(42)).unwrap().table_id, 1);
        assert!(suggest_table(&[], 2, None).is_none());
    }
}

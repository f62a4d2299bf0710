//! Reservation Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default reservation length when the backend omits it (2 hours)
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Reservation lifecycle status
///
/// Only `pending`, `confirmed` and `seated` still hold a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Seated => "seated",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    /// Whether the reservation still holds its table
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled | Self::NoShow)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation as delivered by the reservation backend
///
/// `reservation_time` is kept as the raw string: it may be `HH:mm`,
/// `HH:mm:ss` or an ISO timestamp whose `THH:mm` part holds local time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: i64,
    pub table_id: i64,
    pub reservation_time: String,
    /// Length in minutes
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_party_size")]
    pub party_size: u32,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default)]
    pub customer_name: Option<String>,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

fn default_party_size() -> u32 {
    1
}

impl Reservation {
    /// Minimal reservation on a table, mostly used by tests and fixtures
    pub fn new(
        reservation_id: i64,
        table_id: i64,
        reservation_time: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            reservation_id,
            table_id,
            reservation_time: reservation_time.into(),
            duration,
            party_size: 1,
            status: ReservationStatus::Pending,
            customer_name: None,
        }
    }

    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        use ReservationStatus::*;

        for active in [Pending, Confirmed, Seated] {
            assert!(active.is_active());
        }
        for done in [Completed, Cancelled, NoShow] {
            assert!(!done.is_active());
        }
        assert_eq!(NoShow.to_string(), "no_show");
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "reservationId": 7,
            "tableId": 2,
            "reservationTime": "1970-01-01T18:00:00.000Z",
            "duration": 90,
            "partySize": 4,
            "status": "no_show",
            "customerName": "Nguyen"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.reservation_id, 7);
        assert_eq!(r.duration, 90);
        assert_eq!(r.status, ReservationStatus::NoShow);
        assert_eq!(r.customer_name.as_deref(), Some("Nguyen"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let r: Reservation =
            serde_json::from_str(r#"{"reservationId":1,"tableId":1,"reservationTime":"19:00"}"#)
                .unwrap();
        assert_eq!(r.duration, DEFAULT_DURATION_MINUTES);
        assert_eq!(r.party_size, 1);
        assert_eq!(r.status, ReservationStatus::Pending);
    }
}

//! Time / coordinate mapping
//!
//! Wall-clock strings → minutes since midnight → pixel offsets on the
//! business-hours axis, and back.
//!
//! ISO timestamps coming from the reservation backend carry local wall-clock
//! time in UTC-labelled fields (`1970-01-01T16:00:00.000Z` means 16:00 in the
//! restaurant). The hour/minute is therefore read literally from the `THH:mm`
//! part and never goes through timezone-aware parsing.

use chrono::{NaiveTime, Timelike};

use crate::config::TimelineConfig;

/// Parse `HH:mm`, `HH:mm:ss` or an ISO timestamp into minutes since midnight
///
/// Returns `None` for anything else (including out-of-range fields).
pub fn parse_time_minutes(input: &str) -> Option<i32> {
    let input = input.trim();

    if input.contains('T')
        && let Some(minutes) = iso_hour_minute(input)
    {
        return Some(minutes);
    }

    let mut parts = input.split(':');
    let hours = parse_field(parts.next()?, 1..=2)?;
    let minutes = parse_field(parts.next()?, 2..=2)?;
    if let Some(seconds) = parts.next() {
        let seconds = parse_field(seconds, 2..=2)?;
        if seconds > 59 {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }

    to_minutes(hours, minutes)
}

/// Lenient variant used by the layout path
///
/// A malformed record must not break the whole grid, so unparseable input
/// maps to minute 0 (the bar lands left of the visible window).
pub fn time_to_minutes(input: &str) -> i32 {
    parse_time_minutes(input).unwrap_or_else(|| {
        tracing::warn!(input = %input, "Unparseable reservation time, falling back to 00:00");
        0
    })
}

/// Format minutes since midnight as zero-padded `HH:mm`
///
/// Values past midnight are not wrapped (`1470` → `24:30`), negative values
/// clamp to `00:00`.
pub fn minutes_to_time(minutes: i32) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// First `T` followed by `dd:dd`
fn iso_hour_minute(input: &str) -> Option<i32> {
    let bytes = input.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'T')
        .find_map(|(i, _)| {
            let window = bytes.get(i + 1..i + 6)?;
            let digits = |a: u8, b: u8| -> Option<u32> {
                (a.is_ascii_digit() && b.is_ascii_digit())
                    .then(|| u32::from(a - b'0') * 10 + u32::from(b - b'0'))
            };
            if window[2] != b':' {
                return None;
            }
            let hours = digits(window[0], window[1])?;
            let minutes = digits(window[3], window[4])?;
            to_minutes(hours, minutes)
        })
}

fn parse_field(field: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn to_minutes(hours: u32, minutes: u32) -> Option<i32> {
    (hours < 24 && minutes < 60).then(|| (hours * 60 + minutes) as i32)
}

impl TimelineConfig {
    /// Pixel offset of `minutes` from the left edge of the grid
    ///
    /// Linear, unclamped: times before the window are negative, times after
    /// it exceed [`grid_width`](Self::grid_width). Callers clip when drawing.
    pub fn offset_px(&self, minutes: i32) -> f64 {
        f64::from(minutes - self.window_start_minutes()) / 60.0 * self.hour_width
    }

    /// Time under a grid x coordinate, rounded to the nearest slot (15 min)
    pub fn pixel_to_time(&self, x: f64) -> String {
        let minutes_from_start = x / self.hour_width * 60.0;
        let total = f64::from(self.window_start_minutes()) + minutes_from_start;
        let slot = f64::from(self.slot_minutes.max(1));
        let rounded = (total / slot).round() * slot;
        if !rounded.is_finite() {
            return minutes_to_time(self.window_start_minutes());
        }
        minutes_to_time(rounded as i32)
    }

    /// Left edge of a reservation bar
    pub fn bar_left(&self, reservation_time: &str) -> f64 {
        self.offset_px(time_to_minutes(reservation_time))
    }

    /// Bar width for a duration, never narrower than `min_bar_width`
    pub fn bar_width(&self, duration: u32) -> f64 {
        (f64::from(duration) / 60.0 * self.hour_width).max(self.min_bar_width)
    }

    /// Position of the "now" marker, `None` outside business hours
    pub fn current_time_position(&self, now: NaiveTime) -> Option<f64> {
        let current = (now.hour() * 60 + now.minute()) as i32;
        if current < self.window_start_minutes() || current > self.window_end_minutes() {
            return None;
        }
        Some(self.offset_px(current))
    }
}

/// `start + duration`, saturating at `i32::MAX` for absurd durations
pub fn end_minutes(start: i32, duration: u32) -> i32 {
    start.saturating_add(i32::try_from(duration).unwrap_or(i32::MAX))
}

/// End time of a reservation as `HH:mm`
pub fn end_time(start: &str, duration: u32) -> String {
    minutes_to_time(end_minutes(time_to_minutes(start), duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_times() {
        assert_eq!(parse_time_minutes("18:00"), Some(1080));
        assert_eq!(parse_time_minutes("09:05"), Some(545));
        assert_eq!(parse_time_minutes("9:05"), Some(545));
        assert_eq!(parse_time_minutes("18:30:45"), Some(1110));
        assert_eq!(parse_time_minutes(" 00:00 "), Some(0));
        assert_eq!(parse_time_minutes("23:59"), Some(1439));
    }

    #[test]
    fn test_parse_iso_literal() {
        assert_eq!(parse_time_minutes("2024-01-01T16:30:00.000Z"), Some(990));
        assert_eq!(parse_time_minutes("1970-01-01T16:00:00.000Z"), Some(960));
        // Offset suffix is ignored: the wall-clock part wins
        assert_eq!(parse_time_minutes("2024-06-01T07:15:00+09:00"), Some(435));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "abc", "18", "24:00", "12:60", "12:5", "12:30:99", "1:2:3:4", "-1:00", "T:"] {
            assert_eq!(parse_time_minutes(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_time_to_minutes_falls_back_to_zero() {
        assert_eq!(time_to_minutes("not a time"), 0);
        assert_eq!(time_to_minutes("2024-01-01Txx:yy"), 0);
        assert_eq!(time_to_minutes("19:30"), 1170);
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(545), "09:05");
        assert_eq!(minutes_to_time(1470), "24:30");
        assert_eq!(minutes_to_time(-30), "00:00");
    }

    #[test]
    fn test_round_trip_hh_mm() {
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                let s = format!("{h:02}:{m:02}");
                assert_eq!(minutes_to_time(time_to_minutes(&s)), s);
            }
        }
        // Seconds are dropped by the round trip
        assert_eq!(minutes_to_time(time_to_minutes("18:45:10")), "18:45");
    }

    #[test]
    fn test_offset_px() {
        let config = TimelineConfig::default();
        assert_eq!(config.offset_px(9 * 60), 0.0);
        assert_eq!(config.offset_px(10 * 60 + 30), 180.0);
        assert_eq!(config.offset_px(8 * 60), -120.0);
        assert!(config.offset_px(23 * 60 + 30) > config.grid_width());
    }

    #[test]
    fn test_pixel_to_time_rounds_to_quarter_hour() {
        let config = TimelineConfig::default();
        assert_eq!(config.pixel_to_time(0.0), "09:00");
        assert_eq!(config.pixel_to_time(120.0), "10:00");
        // 7 minutes past 10:00 rounds down, 8 rounds up
        assert_eq!(config.pixel_to_time(134.0), "10:00");
        assert_eq!(config.pixel_to_time(136.0), "10:15");
        assert_eq!(config.pixel_to_time(-2000.0), "00:00");
    }

    #[test]
    fn test_bar_geometry() {
        let config = TimelineConfig::default();
        assert_eq!(config.bar_left("18:00"), 1080.0);
        assert_eq!(config.bar_left("1970-01-01T18:00:00.000Z"), 1080.0);
        assert_eq!(config.bar_width(90), 180.0);
        assert_eq!(config.bar_width(15), config.min_bar_width);
    }

    #[test]
    fn test_end_time() {
        assert_eq!(end_time("18:00", 90), "19:30");
        assert_eq!(end_time("23:30", 60), "24:30");
    }

    #[test]
    fn test_end_time_huge_duration() {
        assert_eq!(end_minutes(1080, u32::MAX), i32::MAX);
        assert_eq!(end_minutes(1080, i32::MAX as u32), i32::MAX);
        assert_eq!(end_minutes(1080, 3_000_000_000), i32::MAX);
        assert!(end_time("18:00", i32::MAX as u32).starts_with("35791394:"));
    }

    #[test]
    fn test_current_time_position() {
        let config = TimelineConfig::default();
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(config.current_time_position(at(8, 59)), None);
        assert_eq!(config.current_time_position(at(9, 0)), Some(0.0));
        assert_eq!(config.current_time_position(at(12, 30)), Some(420.0));
        assert_eq!(config.current_time_position(at(23, 0)), Some(1680.0));
        assert_eq!(config.current_time_position(at(23, 1)), None);
    }
}

//! Timeline configuration
//!
//! Static layout constants: business-hours window, pixel scale and row
//! geometry. Values are fixed per deployment, never derived from data.

use serde::{Deserialize, Serialize};

/// Timeline layout constants
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TIMELINE_START_HOUR | 9 | First hour shown on the axis |
/// | TIMELINE_END_HOUR | 23 | Closing hour (axis ends here) |
/// | TIMELINE_HOUR_WIDTH | 120 | Pixels per hour |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub start_hour: u32,
    pub end_hour: u32,
    /// Pixels per hour
    pub hour_width: f64,
    pub min_bar_width: f64,
    /// Width of the sticky table-name column
    pub table_column_width: f64,
    /// Minimum row height
    pub row_height: f64,
    /// Height of one track (lane) inside a row
    pub track_height: f64,
    /// Vertical padding added to every row
    pub row_padding: f64,
    /// Click-to-create rounding step
    pub slot_minutes: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 23,
            hour_width: 120.0,
            min_bar_width: 60.0,
            table_column_width: 140.0,
            row_height: 64.0,
            track_height: 48.0,
            row_padding: 16.0,
            slot_minutes: 15,
        }
    }
}

impl TimelineConfig {
    /// Defaults overridden by `TIMELINE_*` environment variables
    ///
    /// Invalid values (unparseable, zero width, end before start) are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let start = env_parse::<u32>("TIMELINE_START_HOUR").unwrap_or(config.start_hour);
        let end = env_parse::<u32>("TIMELINE_END_HOUR").unwrap_or(config.end_hour);
        if start < end && end <= 24 {
            config.start_hour = start;
            config.end_hour = end;
        } else {
            tracing::warn!(start, end, "Ignoring invalid timeline business hours");
        }

        if let Some(width) = env_parse::<f64>("TIMELINE_HOUR_WIDTH") {
            if width > 0.0 {
                config.hour_width = width;
            } else {
                tracing::warn!(width, "Ignoring non-positive TIMELINE_HOUR_WIDTH");
            }
        }

        config
    }

    pub fn window_start_minutes(&self) -> i32 {
        (self.start_hour * 60) as i32
    }

    pub fn window_end_minutes(&self) -> i32 {
        (self.end_hour * 60) as i32
    }

    /// Hour labels along the axis, `"09:00"` .. one before closing
    pub fn hour_labels(&self) -> Vec<String> {
        (self.start_hour..self.end_hour)
            .map(|h| format!("{:02}:00", h))
            .collect()
    }

    /// Width of the time grid (without the table column)
    pub fn grid_width(&self) -> f64 {
        f64::from(self.end_hour.saturating_sub(self.start_hour)) * self.hour_width
    }

    /// Full scrollable width, table column included
    pub fn timeline_width(&self) -> f64 {
        self.table_column_width + self.grid_width()
    }

    /// Row height needed to stack `track_count` lanes
    pub fn row_height_for(&self, track_count: u32) -> f64 {
        let tracks = f64::from(track_count.max(1));
        self.row_height.max(tracks * self.track_height + self.row_padding)
    }

    /// Top offset of a track inside its row
    pub fn track_top(&self, track: u32) -> f64 {
        self.row_padding / 2.0 + f64::from(track) * self.track_height
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

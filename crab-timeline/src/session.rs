//! View preferences
//!
//! List/timeline toggle, selected day and floor filter. Owned by the caller
//! and passed in explicitly; persisted as a small JSON file.

use std::fs;
use std::path::Path;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimelineResult;

/// Reservation screen view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    #[default]
    Timeline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPreferences {
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Day shown by the timeline (YYYY-MM-DD)
    pub selected_date: NaiveDate,
    /// `None` = all floors
    #[serde(default)]
    pub selected_floor: Option<i32>,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            selected_date: Local::now().date_naive(),
            selected_floor: None,
        }
    }
}

impl ViewPreferences {
    /// Load from `path`, defaults when the file does not exist yet
    pub fn load(path: &Path) -> TimelineResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No saved view preferences, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> TimelineResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "Saved view preferences");
        Ok(())
    }

    pub fn next_day(&mut self) {
        self.selected_date = self
            .selected_date
            .checked_add_days(Days::new(1))
            .unwrap_or(self.selected_date);
    }

    pub fn prev_day(&mut self) {
        self.selected_date = self
            .selected_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(self.selected_date);
    }

    pub fn today(&mut self) {
        self.selected_date = Local::now().date_naive();
    }

    /// Whether the selected day is today (drives the "now" marker)
    pub fn is_today(&self) -> bool {
        self.selected_date == Local::now().date_naive()
    }
}

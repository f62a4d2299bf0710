//! Row layout
//!
//! Turns tables + reservations into what the Gantt grid draws: one row per
//! active table, each carrying its bars with pixel geometry and track.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use shared::models::{DiningTable, Reservation};

use crate::config::TimelineConfig;
use crate::time::end_time;
use crate::tracks::assign_tracks;

/// A positioned reservation bar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationBar {
    pub reservation: Reservation,
    pub left_px: f64,
    pub width_px: f64,
    /// Offset from the top of the row
    pub top_px: f64,
    pub track: u32,
    /// `HH:mm` label for the bar's right edge
    pub end_time: String,
}

/// One table row of the timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub table: DiningTable,
    /// Bars in the order the reservations were supplied
    pub bars: Vec<ReservationBar>,
    pub track_count: u32,
    pub height: f64,
}

/// Complete layout for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub rows: Vec<TableRow>,
    /// Floors available for the floor selector (all active tables)
    pub floors: Vec<i32>,
    pub hour_labels: Vec<String>,
    pub grid_width: f64,
    pub timeline_width: f64,
}

impl TimelineLayout {
    /// Lay out a day's reservations over the given tables
    ///
    /// Inactive tables are skipped, `floor` narrows the rows to one floor.
    /// Table order is kept as supplied; a repeated table id only gets the
    /// first row. Reservations whose table has no row
    /// are left out.
    pub fn build(
        config: &TimelineConfig,
        tables: &[DiningTable],
        reservations: &[Reservation],
        floor: Option<i32>,
    ) -> Self {
        let mut grouped = group_by_table(reservations);
        let mut seen = HashSet::new();

        let rows: Vec<TableRow> = tables
            .iter()
            .filter(|t| t.is_active)
            .filter(|t| floor.is_none_or(|f| t.floor == f))
            .filter(|t| {
                let first = seen.insert(t.table_id);
                if !first {
                    tracing::debug!(table_id = t.table_id, "Duplicate table skipped");
                }
                first
            })
            .map(|table| {
                let table_reservations = grouped.remove(&table.table_id).unwrap_or_default();
                build_row(config, table, &table_reservations)
            })
            .collect();

        let orphaned: usize = grouped.values().map(Vec::len).sum();
        if orphaned > 0 {
            tracing::debug!(
                orphaned,
                "Reservations without a visible table row were skipped"
            );
        }

        tracing::debug!(
            rows = rows.len(),
            reservations = reservations.len(),
            floor = ?floor,
            "Built timeline layout"
        );

        Self {
            rows,
            floors: floors(tables),
            hour_labels: config.hour_labels(),
            grid_width: config.grid_width(),
            timeline_width: config.timeline_width(),
        }
    }

    /// Sum of row heights, used to size the scroll container
    pub fn total_height(&self) -> f64 {
        self.rows.iter().map(|r| r.height).sum()
    }

    pub fn row(&self, table_id: i64) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.table.table_id == table_id)
    }
}

fn build_row(config: &TimelineConfig, table: &DiningTable, reservations: &[&Reservation]) -> TableRow {
    let tracks = assign_tracks(reservations);

    let bars = reservations
        .iter()
        .zip(tracks.iter())
        .map(|(reservation, track)| ReservationBar {
            left_px: config.bar_left(&reservation.reservation_time),
            width_px: config.bar_width(reservation.duration),
            top_px: config.track_top(track),
            track,
            end_time: end_time(&reservation.reservation_time, reservation.duration),
            reservation: (*reservation).clone(),
        })
        .collect();

    TableRow {
        table: table.clone(),
        bars,
        track_count: tracks.track_count(),
        height: config.row_height_for(tracks.track_count()),
    }
}

/// Group reservations by table, keeping input order inside each group
pub fn group_by_table(reservations: &[Reservation]) -> HashMap<i64, Vec<&Reservation>> {
    let mut grouped: HashMap<i64, Vec<&Reservation>> = HashMap::new();
    for reservation in reservations {
        grouped.entry(reservation.table_id).or_default().push(reservation);
    }
    grouped
}

/// Distinct floors of the active tables, ascending
pub fn floors(tables: &[DiningTable]) -> Vec<i32> {
    tables
        .iter()
        .filter(|t| t.is_active)
        .map(|t| t.floor)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

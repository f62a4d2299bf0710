//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity, one timeline row per active table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub table_id: i64,
    /// Display number shown in the row header (e.g. "A12")
    pub table_number: String,
    pub capacity: u32,
    /// Smallest party the table should be given to
    #[serde(default)]
    pub min_capacity: Option<u32>,
    pub floor: i32,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl DiningTable {
    /// Whether a party of `party_size` fits within the table's capacity bounds
    pub fn fits_party(&self, party_size: u32) -> bool {
        self.capacity >= party_size && self.min_capacity.is_none_or(|min| min <= party_size)
    }
}

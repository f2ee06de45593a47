//! Per-pallet aggregate built by the consolidation analyzer

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::inventory::{parse_prod_date, InventoryRecord};

/// Summary of one physical pallet (or one synthetic combined pallet).
///
/// Rebuilt from scratch on every analysis run; nothing persists between
/// runs and no identity survives across them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PalletSummary {
    /// Pallet number, or `COMB_<id>_<id>…` for merged pallets. The combined
    /// form is a display label only, not a stable key.
    pub pallet_no: String,

    /// Rack of the first contributing record
    pub rack_no: String,

    /// Total input rows folded into this summary
    pub record_count: usize,

    /// Count of distinct non-blank TM numbers; this drives shipping
    /// eligibility, not `record_count`
    pub module_count: usize,

    /// Distinct non-blank part numbers
    pub part_numbers: BTreeSet<String>,

    /// Minimum raw production-date string among folded rows (lexicographic,
    /// as the source system compares them), absent when no row has one
    pub earliest_date: Option<String>,

    /// Original rows folded in, kept for detail export
    pub source_records: Vec<InventoryRecord>,

    /// True when this summary was produced by merging two or more pallets
    pub is_combined: bool,
}

impl PalletSummary {
    /// Earliest production date parsed to a calendar date
    pub fn earliest_naive_date(&self) -> Option<NaiveDate> {
        self.earliest_date.as_deref().and_then(parse_prod_date)
    }

    /// Part numbers joined for display
    pub fn part_no_list(&self) -> String {
        self.part_numbers
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Earliest date for display, "N/A" when absent
    pub fn earliest_date_label(&self) -> &str {
        self.earliest_date.as_deref().unwrap_or("N/A")
    }
}

//! Inventory list filtering
//!
//! In-memory counterpart of the list screen's advanced filter: substring
//! match (case-insensitive) on the free-text ids, exact match on the
//! dropdown-backed fields.

use tm_domain::model::InventoryRecord;

/// Filter criteria for the inventory list
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Substring match on pallet number
    pub pallet_no: Option<String>,

    /// Exact match on location
    pub location: Option<String>,

    /// Substring match on rack number
    pub rack_no: Option<String>,

    /// Substring match on TM number
    pub tm_no: Option<String>,

    /// Substring match on part number
    pub part_no: Option<String>,

    /// Exact match on hold flag
    pub hold_whether: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pallet_no.is_none()
            && self.location.is_none()
            && self.rack_no.is_none()
            && self.tm_no.is_none()
            && self.part_no.is_none()
            && self.hold_whether.is_none()
    }

    /// Apply the filter to a record snapshot
    pub fn apply(&self, records: &[InventoryRecord]) -> Vec<InventoryRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }

    fn matches(&self, record: &InventoryRecord) -> bool {
        if let Some(ref needle) = self.pallet_no {
            if !contains_ignore_case(&record.pallet_no, needle) {
                return false;
            }
        }
        if let Some(ref location) = self.location {
            if record.location != *location {
                return false;
            }
        }
        if let Some(ref needle) = self.rack_no {
            if !contains_ignore_case(&record.rack_no, needle) {
                return false;
            }
        }
        if let Some(ref needle) = self.tm_no {
            if !contains_ignore_case(&record.tm_no, needle) {
                return false;
            }
        }
        if let Some(ref needle) = self.part_no {
            if !contains_ignore_case(&record.part_no, needle) {
                return false;
            }
        }
        if let Some(ref hold) = self.hold_whether {
            if record.hold_whether != *hold {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

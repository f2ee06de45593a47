//! Packaging-stage classification
//!
//! Storage zones encode where a unit sits in the packaging flow: racks in
//! the A/B aisles hold unpackaged stock, racks in the C/D aisles hold
//! packaged stock. Classification tries the rack number first, then the
//! location, by prefix.

use serde::{Deserialize, Serialize};

use crate::model::InventoryRecord;

/// Rack/location prefixes for stock that has not been packaged yet
pub const BEFORE_PACKAGING_ZONES: [&str; 4] = ["LHSAA", "LHSAB", "LHSBA", "LHSBB"];

/// Rack/location prefixes for packaged stock
pub const AFTER_PACKAGING_ZONES: [&str; 4] = ["LHSAC", "LHSAD", "LHSBC", "LHSBD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingStage {
    Before,
    After,
    Unknown,
}

/// Classify a storage position into a packaging stage
pub fn determine_packaging_stage(rack_no: &str, location: &str) -> PackagingStage {
    let rack = rack_no.trim();
    if !rack.is_empty() {
        if BEFORE_PACKAGING_ZONES.iter().any(|p| rack.starts_with(p)) {
            return PackagingStage::Before;
        }
        if AFTER_PACKAGING_ZONES.iter().any(|p| rack.starts_with(p)) {
            return PackagingStage::After;
        }
    }

    let loc = location.trim();
    if !loc.is_empty() {
        if BEFORE_PACKAGING_ZONES.iter().any(|p| loc.starts_with(p)) {
            return PackagingStage::Before;
        }
        if AFTER_PACKAGING_ZONES.iter().any(|p| loc.starts_with(p)) {
            return PackagingStage::After;
        }
    }

    PackagingStage::Unknown
}

/// Packaging progress of one part number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartPackagingSummary {
    pub part_no: String,
    pub before_count: usize,
    pub after_count: usize,
    pub total: usize,
    pub records: Vec<InventoryRecord>,
}

/// Aggregate totals across all part numbers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PackagingTotals {
    pub before: usize,
    pub after: usize,
    pub total: usize,
}

/// Group records by part number and count units before/after packaging.
/// Rows with a blank part number are dropped; rows in unclassifiable zones
/// still count toward the part's total. Results come back sorted ascending
/// by part number.
pub fn analyze_packaging(records: &[InventoryRecord]) -> Vec<PartPackagingSummary> {
    use std::collections::BTreeMap;

    let mut groups: BTreeMap<String, PartPackagingSummary> = BTreeMap::new();

    for record in records {
        let part_no = record.part_no.trim();
        if part_no.is_empty() {
            continue;
        }

        let entry = groups
            .entry(part_no.to_string())
            .or_insert_with(|| PartPackagingSummary {
                part_no: part_no.to_string(),
                before_count: 0,
                after_count: 0,
                total: 0,
                records: Vec::new(),
            });

        match determine_packaging_stage(&record.rack_no, &record.location) {
            PackagingStage::Before => entry.before_count += 1,
            PackagingStage::After => entry.after_count += 1,
            PackagingStage::Unknown => {}
        }
        entry.total += 1;
        entry.records.push(record.clone());
    }

    groups.into_values().collect()
}

/// Sum the per-part counts for the summary display
pub fn packaging_totals(summaries: &[PartPackagingSummary]) -> PackagingTotals {
    PackagingTotals {
        before: summaries.iter().map(|s| s.before_count).sum(),
        after: summaries.iter().map(|s| s.after_count).sum(),
        total: summaries.iter().map(|s| s.total).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(part_no: &str, rack_no: &str, location: &str) -> InventoryRecord {
        InventoryRecord {
            part_no: part_no.to_string(),
            rack_no: rack_no.to_string(),
            location: location.to_string(),
            pallet_no: "P1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_stage_by_rack_prefix() {
        assert_eq!(
            determine_packaging_stage("LHSAA-03", ""),
            PackagingStage::Before
        );
        assert_eq!(
            determine_packaging_stage("LHSBD-11", ""),
            PackagingStage::After
        );
    }

    #[test]
    fn test_rack_wins_over_location() {
        // Rack says before, location says after: rack is authoritative
        assert_eq!(
            determine_packaging_stage("LHSBA-01", "LHSAC"),
            PackagingStage::Before
        );
    }

    #[test]
    fn test_location_fallback_when_rack_blank() {
        assert_eq!(
            determine_packaging_stage("", "LHSAD"),
            PackagingStage::After
        );
        assert_eq!(
            determine_packaging_stage(" ", "DOCK-1"),
            PackagingStage::Unknown
        );
    }

    #[test]
    fn test_analysis_counts_and_ordering() {
        let records = vec![
            record("P-200", "LHSAC-01", ""),
            record("P-100", "LHSAA-01", ""),
            record("P-100", "LHSAC-02", ""),
            record("P-100", "DOCK-9", ""),
            record("", "LHSAA-02", ""),
        ];
        let summaries = analyze_packaging(&records);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].part_no, "P-100");
        assert_eq!(summaries[0].before_count, 1);
        assert_eq!(summaries[0].after_count, 1);
        assert_eq!(summaries[0].total, 3);
        assert_eq!(summaries[1].part_no, "P-200");

        let totals = packaging_totals(&summaries);
        assert_eq!(totals.before, 1);
        assert_eq!(totals.after, 2);
        assert_eq!(totals.total, 4);
    }
}

//! Shipping-plan assembly - the core use case
//!
//! Orchestrates the full FIFO analysis over one inventory snapshot:
//! 1. Filter records by the selected criteria
//! 2. Group rows into per-pallet summaries
//! 3. Classify against the shipping threshold
//! 4. Order both partitions oldest first
//! 5. Greedily combine under-threshold pallets into multiples of eight
//! 6. Select pallets up to the requested shipment quantity
//!
//! Each call is a self-contained pass over the snapshot it was given;
//! nothing is cached between runs and the returned plan is owned by the
//! caller, so independent snapshots can be analyzed concurrently.

use serde::Serialize;

use tm_domain::model::{InventoryRecord, PalletSummary};
use tm_domain::service::{
    classify, combine_transfer_pallets, group_by_pallet, select_by_quantity,
    sort_by_earliest_date, SHIP_THRESHOLD,
};

/// Pallets requested per shipment when the caller does not say otherwise
pub const DEFAULT_PALLET_COUNT: u32 = 20;

/// Options for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Only records in this storage location
    pub location: Option<String>,

    /// Only records with this part number
    pub part_no: Option<String>,

    /// Only records with this hold flag value
    pub hold_whether: Option<String>,

    /// Requested shipment size in pallets; the module target is this × 8
    pub pallet_count: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            location: None,
            part_no: None,
            hold_whether: None,
            pallet_count: DEFAULT_PALLET_COUNT,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_part_no(mut self, part_no: String) -> Self {
        self.part_no = Some(part_no);
        self
    }

    pub fn with_hold_whether(mut self, hold_whether: String) -> Self {
        self.hold_whether = Some(hold_whether);
        self
    }

    pub fn with_pallet_count(mut self, pallet_count: u32) -> Self {
        self.pallet_count = pallet_count;
        self
    }

    /// The module quantity the requested pallet count stands for
    pub fn target_module_count(&self) -> usize {
        self.pallet_count as usize * SHIP_THRESHOLD
    }

    /// Human-readable filter banner for exports
    pub fn filter_banner(&self) -> String {
        let mut conditions = Vec::new();
        if let Some(ref location) = self.location {
            conditions.push(format!("LOCATION: {}", location));
        }
        if let Some(ref part_no) = self.part_no {
            conditions.push(format!("PART NO: {}", part_no));
        }
        if let Some(ref hold) = self.hold_whether {
            conditions.push(format!("HOLD WHETHER: {}", hold));
        }
        conditions.push(format!(
            "TARGET: {} pallets ({} modules)",
            self.pallet_count,
            self.target_module_count()
        ));

        format!("FILTER: {}", conditions.join(" | "))
    }
}

/// Ready/transfer counts for the summary display
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlanSummary {
    pub total_pallets: usize,
    pub ready_count: usize,
    pub transfer_count: usize,
    pub ready_module_total: usize,
    pub transfer_module_total: usize,
}

impl PlanSummary {
    pub fn total_module_count(&self) -> usize {
        self.ready_module_total + self.transfer_module_total
    }
}

/// Everything one analysis run produced
#[derive(Debug, Clone, Serialize)]
pub struct ShippingPlan {
    /// Module quantity the plan was sized for
    pub target_module_count: usize,

    /// The filtered record snapshot the plan was built from
    pub records: Vec<InventoryRecord>,

    /// All pallet summaries, ascending by pallet number
    pub pallets: Vec<PalletSummary>,

    /// Ready-to-ship pallets, oldest first
    pub ready_to_ship: Vec<PalletSummary>,

    /// Under-threshold pallets before combination, oldest first
    pub needs_transfer: Vec<PalletSummary>,

    /// Synthetic pallets produced by the greedy combination
    pub combined: Vec<PalletSummary>,

    /// Transfer pallets the combination could not place
    pub remaining: Vec<PalletSummary>,

    /// Ready + combined pallets selected up to the target quantity
    pub selected_ready: Vec<PalletSummary>,

    /// Leftover transfer pallets selected up to the target quantity
    pub selected_transfer: Vec<PalletSummary>,

    pub summary: PlanSummary,
}

/// Apply the analysis filters to a record snapshot
pub fn filter_records(
    records: &[InventoryRecord],
    options: &AnalysisOptions,
) -> Vec<InventoryRecord> {
    records
        .iter()
        .filter(|r| match &options.location {
            Some(location) => r.location == *location,
            None => true,
        })
        .filter(|r| match &options.part_no {
            Some(part_no) => r.part_no == *part_no,
            None => true,
        })
        .filter(|r| match &options.hold_whether {
            Some(hold) => r.hold_whether == *hold,
            None => true,
        })
        .cloned()
        .collect()
}

/// Filter and group one snapshot into pallet summaries
pub fn analyze_pallets(
    records: &[InventoryRecord],
    options: &AnalysisOptions,
) -> Vec<PalletSummary> {
    let filtered = filter_records(records, options);
    group_by_pallet(&filtered)
}

/// Build the full shipping plan for one snapshot
pub fn build_shipping_plan(
    records: &[InventoryRecord],
    options: &AnalysisOptions,
) -> ShippingPlan {
    let filtered = filter_records(records, options);
    let pallets = group_by_pallet(&filtered);

    let partition = classify(pallets.clone());
    let ready_to_ship = sort_by_earliest_date(&partition.ready_to_ship);
    let needs_transfer = sort_by_earliest_date(&partition.needs_transfer);

    let outcome = combine_transfer_pallets(&needs_transfer);

    let target = options.target_module_count();

    // Combined pallets join the ready pool behind the originally ready ones
    let mut ready_pool = ready_to_ship.clone();
    ready_pool.extend(outcome.combined.iter().cloned());
    let selected_ready = select_by_quantity(&ready_pool, target);
    let selected_transfer = select_by_quantity(&outcome.remaining, target);

    let summary = PlanSummary {
        total_pallets: pallets.len(),
        ready_count: ready_to_ship.len(),
        transfer_count: needs_transfer.len(),
        ready_module_total: ready_to_ship.iter().map(|p| p.module_count).sum(),
        transfer_module_total: needs_transfer.iter().map(|p| p.module_count).sum(),
    };

    ShippingPlan {
        target_module_count: target,
        records: filtered,
        pallets,
        ready_to_ship,
        needs_transfer,
        combined: outcome.combined,
        remaining: outcome.remaining,
        selected_ready,
        selected_transfer,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pallet_no: &str, tm_no: &str, location: &str, prod_date: &str) -> InventoryRecord {
        InventoryRecord {
            pallet_no: pallet_no.to_string(),
            tm_no: tm_no.to_string(),
            location: location.to_string(),
            part_no: "PN-1".to_string(),
            prod_date: prod_date.to_string(),
            ..Default::default()
        }
    }

    /// `module_count` rows with distinct TM numbers on one pallet
    fn pallet_rows(
        pallet_no: &str,
        module_count: usize,
        location: &str,
        prod_date: &str,
    ) -> Vec<InventoryRecord> {
        (0..module_count)
            .map(|i| record(pallet_no, &format!("{}-{}", pallet_no, i), location, prod_date))
            .collect()
    }

    #[test]
    fn test_analysis_options_builder() {
        let options = AnalysisOptions::new()
            .with_location("LHSAA".to_string())
            .with_part_no("PN-9".to_string())
            .with_pallet_count(3);

        assert_eq!(options.location.as_deref(), Some("LHSAA"));
        assert_eq!(options.part_no.as_deref(), Some("PN-9"));
        assert_eq!(options.target_module_count(), 24);
    }

    #[test]
    fn test_filter_records_by_location_and_hold() {
        let mut held = record("P1", "T1", "LHSAA", "");
        held.hold_whether = "Y".to_string();
        let free = record("P2", "T2", "LHSAA", "");
        let elsewhere = record("P3", "T3", "LHSBD", "");

        let options = AnalysisOptions::new()
            .with_location("LHSAA".to_string())
            .with_hold_whether("N".to_string());
        let filtered = filter_records(&[held, free, elsewhere], &options);

        // The "free" record has a blank hold flag, not "N"
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_plan_pipeline_end_to_end() {
        // One shippable pallet (8), two combinable (5+3), one stranded (2)
        let mut rows = pallet_rows("P1", 8, "LHSAA", "2024-01-05");
        rows.extend(pallet_rows("P2", 5, "LHSAA", "2024-01-01"));
        rows.extend(pallet_rows("P3", 3, "LHSAA", "2024-01-02"));
        rows.extend(pallet_rows("P4", 2, "LHSAA", "2024-01-03"));

        let options = AnalysisOptions::new().with_pallet_count(2);
        let plan = build_shipping_plan(&rows, &options);

        assert_eq!(plan.summary.total_pallets, 4);
        assert_eq!(plan.summary.ready_count, 1);
        assert_eq!(plan.summary.transfer_count, 3);
        assert_eq!(plan.summary.ready_module_total, 8);
        assert_eq!(plan.summary.transfer_module_total, 10);
        assert_eq!(plan.summary.total_module_count(), 18);

        assert_eq!(plan.combined.len(), 1);
        assert_eq!(plan.combined[0].pallet_no, "COMB_P2_P3");
        assert_eq!(plan.remaining.len(), 1);
        assert_eq!(plan.remaining[0].pallet_no, "P4");

        // Target 16: P1 (8) + COMB_P2_P3 (8) cover it exactly
        assert_eq!(plan.target_module_count, 16);
        assert_eq!(plan.selected_ready.len(), 2);
        assert_eq!(plan.selected_ready[0].pallet_no, "P1");
        assert_eq!(plan.selected_ready[1].pallet_no, "COMB_P2_P3");
    }

    #[test]
    fn test_plan_is_rebuilt_per_run() {
        let rows = pallet_rows("P1", 8, "LHSAA", "2024-01-05");
        let options = AnalysisOptions::new();

        let first = build_shipping_plan(&rows, &options);
        let second = build_shipping_plan(&rows, &options);

        assert_eq!(first.pallets.len(), second.pallets.len());
        assert_eq!(
            first.pallets[0].module_count,
            second.pallets[0].module_count
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let plan = build_shipping_plan(&[], &AnalysisOptions::new());
        assert_eq!(plan.summary.total_pallets, 0);
        assert!(plan.selected_ready.is_empty());
        assert!(plan.selected_transfer.is_empty());
    }

    #[test]
    fn test_filter_banner() {
        let options = AnalysisOptions::new()
            .with_location("LHSAA".to_string())
            .with_pallet_count(2);
        let banner = options.filter_banner();
        assert!(banner.contains("LOCATION: LHSAA"));
        assert!(banner.contains("2 pallets (16 modules)"));
    }
}

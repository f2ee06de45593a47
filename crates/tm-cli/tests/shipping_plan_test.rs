//! End-to-end shipping plan regression test
//!
//! Runs the full pipeline the `plan` command drives - CSV load, filtering,
//! grouping, classification, FIFO ordering, greedy combination, quantity
//! selection, Excel export - over a synthetic warehouse snapshot.

use std::io::Write;

use tm_app::app::{build_shipping_plan, AnalysisOptions};
use tm_app::export::export_shipping_plan;
use tm_domain::model::InventoryRecord;
use tm_infra::inventory_csv::load_inventory_records;

/// One pallet's rows: `module_count` distinct TM numbers plus one
/// duplicate row for the first TM
fn pallet_rows(
    pallet_no: &str,
    module_count: usize,
    location: &str,
    prod_date: &str,
) -> Vec<InventoryRecord> {
    let mut rows: Vec<InventoryRecord> = (0..module_count)
        .map(|i| InventoryRecord {
            pallet_no: pallet_no.to_string(),
            location: location.to_string(),
            rack_no: format!("{}-01", location),
            tm_no: format!("{}-TM{:03}", pallet_no, i),
            part_no: "PN-100".to_string(),
            hold_whether: "N".to_string(),
            prod_date: prod_date.to_string(),
            upload_time: "2024-03-01 08:00".to_string(),
        })
        .collect();

    let mut duplicate = rows[0].clone();
    duplicate.upload_time = "2024-03-01 09:00".to_string();
    rows.push(duplicate);
    rows
}

fn snapshot() -> Vec<InventoryRecord> {
    let mut rows = Vec::new();
    rows.extend(pallet_rows("PLT-A", 9, "LHSAA", "2024-01-10"));
    rows.extend(pallet_rows("PLT-B", 8, "LHSAA", "2024-01-03"));
    rows.extend(pallet_rows("PLT-C", 5, "LHSAA", "2024-01-01"));
    rows.extend(pallet_rows("PLT-D", 3, "LHSAA", "2024-01-02"));
    rows.extend(pallet_rows("PLT-E", 2, "LHSAA", "2024-01-04"));
    rows.extend(pallet_rows("PLT-F", 4, "LHSBB", "2024-01-05"));

    // Held stock in another location, excluded by the filter below
    let mut held = pallet_rows("PLT-H", 8, "LHSBD", "2024-01-01");
    for row in &mut held {
        row.hold_whether = "Y".to_string();
    }
    rows.extend(held);
    rows
}

#[test]
fn plan_over_synthetic_snapshot() {
    let records = snapshot();
    let options = AnalysisOptions::new()
        .with_hold_whether("N".to_string())
        .with_pallet_count(3);

    let plan = build_shipping_plan(&records, &options);

    // Hold-flagged pallet never enters the analysis
    assert!(plan.pallets.iter().all(|p| p.pallet_no != "PLT-H"));
    assert_eq!(plan.summary.total_pallets, 6);

    // Duplicate TM rows count as rows, not modules
    let pallet_a = plan
        .pallets
        .iter()
        .find(|p| p.pallet_no == "PLT-A")
        .unwrap();
    assert_eq!(pallet_a.module_count, 9);
    assert_eq!(pallet_a.record_count, 10);

    // FIFO: PLT-B (Jan 03) ships before PLT-A (Jan 10)
    assert_eq!(plan.summary.ready_count, 2);
    assert_eq!(plan.ready_to_ship[0].pallet_no, "PLT-B");
    assert_eq!(plan.ready_to_ship[1].pallet_no, "PLT-A");

    // Oldest-first combination: C (5) + D (3) hit 8 exactly; E (2) and
    // F (4) total 6 and stay behind
    assert_eq!(plan.combined.len(), 1);
    assert_eq!(plan.combined[0].pallet_no, "COMB_PLT-C_PLT-D");
    assert_eq!(plan.combined[0].module_count, 8);
    assert_eq!(plan.remaining.len(), 2);

    // No record lost across combination
    let transfer_rows: usize = plan.needs_transfer.iter().map(|p| p.source_records.len()).sum();
    let outcome_rows: usize = plan
        .combined
        .iter()
        .chain(plan.remaining.iter())
        .map(|p| p.source_records.len())
        .sum();
    assert_eq!(transfer_rows, outcome_rows);

    // Target 24: B (8) + A (9) + combined (8) = 25 crosses the threshold
    assert_eq!(plan.target_module_count, 24);
    let selected: Vec<&str> = plan
        .selected_ready
        .iter()
        .map(|p| p.pallet_no.as_str())
        .collect();
    assert_eq!(selected, vec!["PLT-B", "PLT-A", "COMB_PLT-C_PLT-D"]);
}

#[test]
fn plan_survives_csv_round_trip_and_exports() {
    let dir = tempfile::tempdir().unwrap();

    // Write the snapshot out the way the source system would
    let csv_path = dir.path().join("inventory.csv");
    {
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(
            file,
            "pallet_no,location,rack_no,tm_no,part_no,hold_whether,prod_date,upload_time"
        )
        .unwrap();
        for r in snapshot() {
            writeln!(
                file,
                "{},{},{},{},{},{},{},{}",
                r.pallet_no,
                r.location,
                r.rack_no,
                r.tm_no,
                r.part_no,
                r.hold_whether,
                r.prod_date,
                r.upload_time
            )
            .unwrap();
        }
    }

    let records = load_inventory_records(&csv_path).unwrap();
    assert_eq!(records.len(), snapshot().len());

    let options = AnalysisOptions::new()
        .with_hold_whether("N".to_string())
        .with_pallet_count(3);
    let plan = build_shipping_plan(&records, &options);

    let xlsx_path = dir.path().join("plan.xlsx");
    export_shipping_plan(&plan, &options.filter_banner(), &xlsx_path).unwrap();
    assert!(xlsx_path.exists());
}

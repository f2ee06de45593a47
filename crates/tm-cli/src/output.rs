//! Output formatting module

use chrono::NaiveDate;

use tm_app::app::ShippingPlan;
use tm_domain::model::{InventoryRecord, PalletSummary, TruckDispatch};
use tm_domain::service::packaging::{PackagingTotals, PartPackagingSummary};
use tm_domain::service::Partition;
use tm_types::{OutputFormat, Result};

pub fn output_pallets(output_format: OutputFormat, pallets: &[PalletSummary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(pallets)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nPallet Analysis");
    println!("===============");

    if pallets.is_empty() {
        println!("No pallets found.");
        return Ok(());
    }

    println!(
        "{:<24} {:<12} {:>6} {:>9}  {:<12} {}",
        "Pallet No", "Rack No", "Rows", "TM Count", "Prod Date", "Part No List"
    );
    println!("{}", "-".repeat(90));
    for pallet in pallets {
        println!(
            "{:<24} {:<12} {:>6} {:>9}  {:<12} {}",
            pallet.pallet_no,
            pallet.rack_no,
            pallet.record_count,
            pallet.module_count,
            pallet.earliest_date_label(),
            pallet.part_no_list()
        );
    }
    println!("\nFound {} pallets", pallets.len());

    Ok(())
}

pub fn output_classification_summary(partition: &Partition) {
    let ready_modules: usize = partition.ready_to_ship.iter().map(|p| p.module_count).sum();
    let transfer_modules: usize = partition
        .needs_transfer
        .iter()
        .map(|p| p.module_count)
        .sum();

    println!("\nReady to ship (8+):   {:>5} pallets, {:>6} TMs", partition.ready_to_ship.len(), ready_modules);
    println!("Needs transfer (<8):  {:>5} pallets, {:>6} TMs", partition.needs_transfer.len(), transfer_modules);
}

pub fn output_plan_summary(plan: &ShippingPlan) {
    let summary = &plan.summary;

    println!("\nShipping Plan");
    println!("=============");
    println!("Target quantity:      {:>6} TMs", plan.target_module_count);
    println!(
        "Total pallets:        {:>6} ({} TMs)",
        summary.total_pallets,
        summary.total_module_count()
    );
    println!(
        "Ready to ship (8+):   {:>6} pallets, {:>6} TMs",
        summary.ready_count, summary.ready_module_total
    );
    println!(
        "Needs transfer (<8):  {:>6} pallets, {:>6} TMs",
        summary.transfer_count, summary.transfer_module_total
    );
    println!(
        "Combined pallets:     {:>6} built, {:>6} left over",
        plan.combined.len(),
        plan.remaining.len()
    );

    let selected_modules: usize = plan.selected_ready.iter().map(|p| p.module_count).sum();
    println!(
        "Selected for plan:    {:>6} pallets, {:>6} TMs",
        plan.selected_ready.len(),
        selected_modules
    );
}

pub fn output_packaging(
    output_format: OutputFormat,
    summaries: &[PartPackagingSummary],
    totals: PackagingTotals,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summaries)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nPackaging Analysis");
    println!("==================");

    if summaries.is_empty() {
        println!("No part numbers found.");
        return Ok(());
    }

    println!(
        "{:<20} {:>8} {:>8} {:>8}",
        "Part No", "Before", "After", "Total"
    );
    println!("{}", "-".repeat(48));
    for summary in summaries {
        println!(
            "{:<20} {:>8} {:>8} {:>8}",
            summary.part_no, summary.before_count, summary.after_count, summary.total
        );
    }
    println!("{}", "-".repeat(48));
    println!(
        "{:<20} {:>8} {:>8} {:>8}",
        "All parts", totals.before, totals.after, totals.total
    );

    Ok(())
}

pub fn output_records(output_format: OutputFormat, records: &[InventoryRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(records)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nInventory List");
    println!("==============");

    if records.is_empty() {
        println!("No search results found.");
        return Ok(());
    }

    println!(
        "{:<20} {:<10} {:<12} {:<16} {:<14} {:<5} {:<12}",
        "Pallet No", "Location", "Rack No", "TM No", "Part No", "Hold", "Prod Date"
    );
    println!("{}", "-".repeat(96));
    for record in records {
        println!(
            "{:<20} {:<10} {:<12} {:<16} {:<14} {:<5} {:<12}",
            record.pallet_no,
            record.location,
            record.rack_no,
            record.tm_no,
            record.part_no,
            record.hold_whether,
            record.prod_date
        );
    }
    println!("\nFound {} rows", records.len());

    Ok(())
}

pub fn output_dispatches(
    output_format: OutputFormat,
    date: NaiveDate,
    dispatches: &[TruckDispatch],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(dispatches)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nTruck Status Board - {}", date);
    println!("=================================");

    if dispatches.is_empty() {
        println!("No trucks scheduled for this date.");
        return Ok(());
    }

    println!(
        "{:<7} {:<14} {:<8} {:<10} {:<12} {:<8} {:<10} {}",
        "ETD", "Delivery No", "Dest", "Truck ID", "Forza ID", "Pager", "Status", "Parts"
    );
    println!("{}", "-".repeat(90));
    for dispatch in dispatches {
        println!(
            "{:<7} {:<14} {:<8} {:<10} {:<12} {:<8} {:<10} {}",
            dispatch.departure_time,
            dispatch.delivery_no,
            dispatch.destination.label(),
            dispatch.truck_id,
            dispatch.forza_id,
            dispatch.pager_no.as_deref().unwrap_or("-"),
            dispatch.status.label(),
            dispatch.parts
        );
    }

    Ok(())
}

//! Excel export functionality
//!
//! Workbook layout follows the shipping-plan report the warehouse team
//! works from: selected ready pallets, the full transfer backlog, the
//! analysis summary, the raw rows oldest first, and the quantity-selection
//! recap.

use std::cmp::Ordering;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use tm_domain::model::{InventoryRecord, PalletSummary};
use tm_types::{Error, Result};

use crate::app::ShippingPlan;

const PALLET_HEADERS: [&str; 4] = ["Pallet No", "Rack No", "TM Count", "Prod Date"];

const RECORD_HEADERS: [&str; 8] = [
    "Pallet No",
    "Location",
    "Rack No",
    "TM No",
    "Part No",
    "Hold Whether",
    "Prod Date",
    "Upload Time",
];

/// Export a shipping plan to an Excel workbook
pub fn export_shipping_plan(plan: &ShippingPlan, banner: &str, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let ready_sheet = workbook.add_worksheet();
    write_pallet_sheet(ready_sheet, "Ready to Ship", banner, &plan.selected_ready)?;

    let transfer_sheet = workbook.add_worksheet();
    write_pallet_sheet(transfer_sheet, "Transfer Needed", banner, &plan.needs_transfer)?;

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, plan)?;

    let detail_sheet = workbook.add_worksheet();
    write_detail_sheet(detail_sheet, &plan.records)?;

    let quantity_sheet = workbook.add_worksheet();
    write_quantity_sheet(quantity_sheet, plan)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_pallet_sheet(
    sheet: &mut Worksheet,
    name: &str,
    banner: &str,
    pallets: &[PalletSummary],
) -> Result<()> {
    sheet.set_name(name).map_err(|e| Error::Excel(e.to_string()))?;

    let banner_format = Format::new()
        .set_bold()
        .set_font_color(Color::Blue)
        .set_background_color(Color::RGB(0xFFF2CC));
    sheet
        .write_string_with_format(0, 0, banner, &banner_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xE0E0E0));
    for (col, header) in PALLET_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(2, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Combined pallets stand out so the transfer crew can spot them
    let combined_format = Format::new().set_background_color(Color::RGB(0xFFEB3B));

    for (row_idx, pallet) in pallets.iter().enumerate() {
        let row = (row_idx + 3) as u32;

        if pallet.is_combined {
            sheet
                .write_string_with_format(row, 0, &pallet.pallet_no, &combined_format)
                .map_err(|e| Error::Excel(e.to_string()))?;
        } else {
            sheet
                .write_string(row, 0, &pallet.pallet_no)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }

        sheet
            .write_string(row, 1, &pallet.rack_no)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, pallet.module_count as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, pallet.earliest_date_label())
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    set_pallet_column_widths(sheet)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, plan: &ShippingPlan) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xE0E0E0));
    let headers = ["Summary Type", "Count", "TM Count", "Details"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let summary = &plan.summary;

    sheet
        .write_string(1, 0, "Total Pallets")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(1, 1, summary.total_pallets as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Ready to Ship (8+)")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, summary.ready_count as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 2, summary.ready_module_total as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 3, "Immediate shipping possible")
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Needs Transfer (<8)")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, summary.transfer_count as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 2, summary.transfer_module_total as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(3, 3, "Requires worker transfer")
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Total TM Count")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 2, summary.total_module_count() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(4, 3, "Combined TM count")
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 20)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_detail_sheet(sheet: &mut Worksheet, records: &[InventoryRecord]) -> Result<()> {
    sheet
        .set_name("Detailed Data")
        .map_err(|e| Error::Excel(e.to_string()))?;

    // Oldest first; rows without a date sink to the bottom. Raw string
    // comparison, same as the listing screen.
    let mut sorted: Vec<&InventoryRecord> = records.iter().collect();
    sorted.sort_by(|a, b| match (a.prod_date(), b.prod_date()) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xE0E0E0));
    for (col, header) in RECORD_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, record) in sorted.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        write_record_row(sheet, row, record)?;
    }

    for col in 0..RECORD_HEADERS.len() {
        sheet
            .set_column_width(col as u16, 18)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_quantity_sheet(sheet: &mut Worksheet, plan: &ShippingPlan) -> Result<()> {
    sheet
        .set_name("Quantity Selection")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4CAF50));
    let headers = ["Selection Type", "Count", "TM Count", "Details"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    let ready_modules: usize = plan.selected_ready.iter().map(|p| p.module_count).sum();
    let transfer_modules: usize = plan.selected_transfer.iter().map(|p| p.module_count).sum();
    let selected_modules = ready_modules + transfer_modules;
    let efficiency_pct = if plan.target_module_count > 0 {
        (selected_modules as f64 / plan.target_module_count as f64 * 100.0).round()
    } else {
        0.0
    };

    sheet
        .write_string(1, 0, "Target Quantity")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(1, 2, plan.target_module_count as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(
            1,
            3,
            &format!("Requested: {} modules", plan.target_module_count),
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Ready to Ship (8+)")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, plan.selected_ready.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 2, ready_modules as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 3, "Immediate shipping possible")
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Transfer Needed (<8)")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, plan.selected_transfer.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 2, transfer_modules as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(3, 3, "Requires worker transfer")
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Total Selected")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(
            4,
            1,
            (plan.selected_ready.len() + plan.selected_transfer.len()) as f64,
        )
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 2, selected_modules as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(
            4,
            3,
            &format!("Selected: {}/{}", selected_modules, plan.target_module_count),
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Efficiency")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(5, 3, &format!("{}%", efficiency_pct))
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 25)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 35)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export the source rows of one pallet to a single-sheet workbook
pub fn export_pallet_detail(
    pallet_no: &str,
    records: &[InventoryRecord],
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    // Excel caps sheet names at 31 characters
    let sheet_name: String = pallet_no.chars().take(31).collect();
    sheet
        .set_name(&sheet_name)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xE0E0E0));
    for (col, header) in RECORD_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        write_record_row(sheet, row, record)?;
    }

    for col in 0..RECORD_HEADERS.len() {
        sheet
            .set_column_width(col as u16, 18)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_record_row(sheet: &mut Worksheet, row: u32, record: &InventoryRecord) -> Result<()> {
    let cells = [
        &record.pallet_no,
        &record.location,
        &record.rack_no,
        &record.tm_no,
        &record.part_no,
        &record.hold_whether,
        &record.prod_date,
        &record.upload_time,
    ];
    for (col, value) in cells.iter().enumerate() {
        sheet
            .write_string(row, col as u16, *value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    Ok(())
}

fn set_pallet_column_widths(sheet: &mut Worksheet) -> Result<()> {
    sheet
        .set_column_width(0, 40)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 10)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(3, 12)
        .map_err(|e| Error::Excel(e.to_string()))?;
    Ok(())
}

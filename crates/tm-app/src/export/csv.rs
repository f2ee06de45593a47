//! CSV export for filtered inventory lists

use std::path::Path;

use tm_domain::model::InventoryRecord;
use tm_types::{Error, Result};

/// Write a filtered record list to CSV, one row per inventory record
pub fn export_records_csv(records: &[InventoryRecord], output_path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(output_path).map_err(|e| Error::CsvLoader(e.to_string()))?;

    writer
        .write_record([
            "pallet_no",
            "location",
            "rack_no",
            "tm_no",
            "part_no",
            "hold_whether",
            "prod_date",
            "upload_time",
        ])
        .map_err(|e| Error::CsvLoader(e.to_string()))?;

    for record in records {
        writer
            .write_record([
                &record.pallet_no,
                &record.location,
                &record.rack_no,
                &record.tm_no,
                &record.part_no,
                &record.hold_whether,
                &record.prod_date,
                &record.upload_time,
            ])
            .map_err(|e| Error::CsvLoader(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

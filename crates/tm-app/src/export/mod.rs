//! Export functionality

pub mod csv;
pub mod excel;

pub use csv::export_records_csv;
pub use excel::{export_pallet_detail, export_shipping_plan};

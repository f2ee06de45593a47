//! Repository trait definitions for data persistence

use chrono::NaiveDate;

use crate::model::{InventoryRecord, TruckDispatch};
use tm_types::Error;

/// Repository for inventory list rows
pub trait InventoryRepository {
    /// Load all inventory rows
    fn find_all(&self) -> Result<Vec<InventoryRecord>, Error>;

    /// Find rows by storage location
    fn find_by_location(&self, location: &str) -> Result<Vec<InventoryRecord>, Error>;

    /// Find rows by part number
    fn find_by_part(&self, part_no: &str) -> Result<Vec<InventoryRecord>, Error>;

    /// Find rows by pallet number
    fn find_by_pallet(&self, pallet_no: &str) -> Result<Vec<InventoryRecord>, Error>;
}

/// Repository for truck dispatch schedules
pub trait DispatchRepository {
    /// Replace the schedule of one departure date
    fn save_schedule(&self, date: NaiveDate, dispatches: &[TruckDispatch]) -> Result<(), Error>;

    /// Load the schedule of one departure date
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<TruckDispatch>, Error>;

    /// Load all scheduled dispatches
    fn find_all(&self) -> Result<Vec<TruckDispatch>, Error>;
}

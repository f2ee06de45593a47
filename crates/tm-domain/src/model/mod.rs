//! Domain model types

pub mod inventory;
pub mod pallet_summary;
pub mod truck_dispatch;

pub use inventory::InventoryRecord;
pub use pallet_summary::PalletSummary;
pub use truck_dispatch::{Destination, DispatchStatus, TruckDispatch};

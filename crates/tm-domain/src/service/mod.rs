//! Domain services

pub mod dispatch_board;
pub mod packaging;
pub mod pallet_analyzer;

pub use pallet_analyzer::{
    classify, combine_transfer_pallets, group_by_pallet, select_by_quantity,
    sort_by_earliest_date, CombineOutcome, Partition, SHIP_THRESHOLD,
};

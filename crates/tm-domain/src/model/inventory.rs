//! Inventory list row type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One physical unit's tracking row from the warehouse inventory list.
///
/// Fields arrive as free text from a manual-entry source system; blank
/// strings mean "not recorded" and are tolerated everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Pallet identifier, groups rows onto one physical pallet
    #[serde(default)]
    pub pallet_no: String,

    /// Storage area (e.g. "LHSAA")
    #[serde(default)]
    pub location: String,

    /// Rack position within the location
    #[serde(default)]
    pub rack_no: String,

    /// Transport module number; the distinct count per pallet gates
    /// shipping eligibility
    #[serde(default)]
    pub tm_no: String,

    /// Product part number
    #[serde(default)]
    pub part_no: String,

    /// Hold flag from the source system ("Y"/"N", may be blank)
    #[serde(default)]
    pub hold_whether: String,

    /// Production date as entered upstream, nominally YYYY-MM-DD
    #[serde(default)]
    pub prod_date: String,

    /// Timestamp of the upload batch that produced this row
    #[serde(default)]
    pub upload_time: String,
}

impl InventoryRecord {
    /// Production date string, `None` when blank
    pub fn prod_date(&self) -> Option<&str> {
        let s = self.prod_date.trim();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    /// Production date parsed to a calendar date, `None` when blank or
    /// unparseable
    pub fn parsed_prod_date(&self) -> Option<NaiveDate> {
        self.prod_date().and_then(parse_prod_date)
    }
}

/// Parse a production date string against the formats the source system emits
pub fn parse_prod_date(s: &str) -> Option<NaiveDate> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s.trim(), fmt) {
            return Some(date);
        }
    }
    None
}

//! Truck dispatch schedule types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Delivery destination; the schedule only accepts this closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    #[serde(rename = "VW US")]
    VwUs,
    #[serde(rename = "VW MX")]
    VwMx,
    #[serde(rename = "KMX")]
    Kmx,
    #[serde(rename = "VX US")]
    VxUs,
}

impl Destination {
    pub fn label(&self) -> &'static str {
        match self {
            Destination::VwUs => "VW US",
            Destination::VwMx => "VW MX",
            Destination::Kmx => "KMX",
            Destination::VxUs => "VX US",
        }
    }

    /// Parse a destination label, `None` for anything outside the set
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "VW US" => Some(Destination::VwUs),
            "VW MX" => Some(Destination::VwMx),
            "KMX" => Some(Destination::Kmx),
            "VX US" => Some(Destination::VxUs),
            _ => None,
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle state of a scheduled truck
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchStatus {
    #[default]
    Scheduled,
    #[serde(rename = "On Site")]
    OnSite,
    Shipped,
    Delayed,
    Cancelled,
    Arrived,
}

impl DispatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DispatchStatus::Scheduled => "Scheduled",
            DispatchStatus::OnSite => "On Site",
            DispatchStatus::Shipped => "Shipped",
            DispatchStatus::Delayed => "Delayed",
            DispatchStatus::Cancelled => "Cancelled",
            DispatchStatus::Arrived => "Arrived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Scheduled" => Some(DispatchStatus::Scheduled),
            "On Site" => Some(DispatchStatus::OnSite),
            "Shipped" => Some(DispatchStatus::Shipped),
            "Delayed" => Some(DispatchStatus::Delayed),
            "Cancelled" => Some(DispatchStatus::Cancelled),
            "Arrived" => Some(DispatchStatus::Arrived),
            _ => None,
        }
    }

    /// Shipped and arrived trucks sink to the bottom of the status board
    pub fn is_terminal(&self) -> bool {
        matches!(self, DispatchStatus::Shipped | DispatchStatus::Arrived)
    }
}

impl std::fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One scheduled truck departure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckDispatch {
    pub departure_date: NaiveDate,

    /// Estimated departure time, "HH:MM"
    pub departure_time: String,

    pub delivery_no: String,

    pub destination: Destination,

    pub truck_id: String,

    /// Forza/Brown carrier id
    pub forza_id: String,

    /// Loaded parts description (e.g. "PartA(5) + PartB(3)")
    #[serde(default)]
    pub parts: String,

    #[serde(default)]
    pub pager_no: Option<String>,

    #[serde(default)]
    pub status: DispatchStatus,
}

impl TruckDispatch {
    /// Departure time parsed to a time of day, `None` when malformed
    pub fn parsed_departure_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.departure_time.trim(), "%H:%M").ok()
    }

    /// Record the pager handed to the driver. A scheduled truck with a pager
    /// is on site.
    pub fn assign_pager(&mut self, pager_no: String) {
        self.pager_no = Some(pager_no);
        if self.status == DispatchStatus::Scheduled {
            self.status = DispatchStatus::OnSite;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch() -> TruckDispatch {
        TruckDispatch {
            departure_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            departure_time: "07:00".to_string(),
            delivery_no: "D-100".to_string(),
            destination: Destination::VwUs,
            truck_id: "T-01".to_string(),
            forza_id: "F-01".to_string(),
            parts: String::new(),
            pager_no: None,
            status: DispatchStatus::Scheduled,
        }
    }

    #[test]
    fn test_assign_pager_promotes_scheduled() {
        let mut d = dispatch();
        d.assign_pager("P-7".to_string());
        assert_eq!(d.status, DispatchStatus::OnSite);
        assert_eq!(d.pager_no.as_deref(), Some("P-7"));
    }

    #[test]
    fn test_assign_pager_keeps_non_scheduled_status() {
        let mut d = dispatch();
        d.status = DispatchStatus::Delayed;
        d.assign_pager("P-7".to_string());
        assert_eq!(d.status, DispatchStatus::Delayed);
    }

    #[test]
    fn test_destination_parse_rejects_unknown() {
        assert_eq!(Destination::parse("VW MX"), Some(Destination::VwMx));
        assert_eq!(Destination::parse("VW DE"), None);
    }

    #[test]
    fn test_parsed_departure_time() {
        let mut d = dispatch();
        assert!(d.parsed_departure_time().is_some());
        d.departure_time = "late".to_string();
        assert!(d.parsed_departure_time().is_none());
    }
}

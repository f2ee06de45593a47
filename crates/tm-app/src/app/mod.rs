//! Application use cases

pub mod analysis_service;
pub mod query_service;

pub use analysis_service::{
    analyze_pallets, build_shipping_plan, AnalysisOptions, PlanSummary, ShippingPlan,
};
pub use query_service::RecordFilter;

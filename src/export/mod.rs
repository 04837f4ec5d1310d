//! Export module
//!
//! Breakdown report export in multiple formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable snapshot
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_breakdown_csv;
pub use json::{export_breakdown_json, BreakdownExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_breakdown_yaml;

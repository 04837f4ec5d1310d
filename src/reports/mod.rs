//! Reports module
//!
//! Read-only analysis over the aggregated ledger data.

pub mod breakdown;

pub use breakdown::{BreakdownReport, BreakdownSlice};

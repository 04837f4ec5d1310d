//! Display formatting for terminal output
//!
//! Formatting helpers and the chart rendering boundary.

pub mod chart;
pub mod format;

pub use chart::{BreakdownChart, ChartRenderer, ChartSlice, TextChartRenderer};

//! JSON export functionality
//!
//! Exports the breakdown report to machine-readable JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Money;
use crate::reports::BreakdownReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Serializable snapshot of a breakdown report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Sum of all expense magnitudes, in cents
    pub total_spending: Money,

    /// Total number of expenses
    pub expense_count: usize,

    /// Per-category rows, largest spend first
    pub categories: Vec<CategoryExportRow>,
}

/// One exported category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExportRow {
    pub category: String,
    /// Total spent in this category, in cents
    pub total: Money,
    pub count: usize,
    pub percentage: f64,
}

impl BreakdownExport {
    /// Build an export snapshot from a report
    pub fn from_report(report: &BreakdownReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            total_spending: report.total_spending,
            expense_count: report.expense_count,
            categories: report
                .slices
                .iter()
                .map(|slice| CategoryExportRow {
                    category: slice.label.clone(),
                    total: slice.total,
                    count: slice.count,
                    percentage: slice.percentage,
                })
                .collect(),
        }
    }
}

/// Export the breakdown report as pretty-printed JSON
pub fn export_breakdown_json<W: Write>(
    report: &BreakdownReport,
    writer: &mut W,
) -> TallyResult<()> {
    let export = BreakdownExport::from_report(report);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}

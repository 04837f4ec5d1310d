//! CSV export functionality
//!
//! Exports the breakdown report in spreadsheet-compatible rows.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::reports::BreakdownReport;

/// Export the breakdown report to CSV
pub fn export_breakdown_csv<W: Write>(report: &BreakdownReport, writer: &mut W) -> TallyResult<()> {
    writeln!(writer, "Category,Amount,Count,Percentage")
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for slice in &report.slices {
        writeln!(
            writer,
            "{},{:.2},{},{:.2}",
            slice.label,
            slice.total.cents() as f64 / 100.0,
            slice.count,
            slice.percentage
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    writeln!(
        writer,
        "TOTAL,{:.2},{},100.00",
        report.total_spending.cents() as f64 / 100.0,
        report.expense_count
    )
    .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

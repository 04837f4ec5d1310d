//! YAML export functionality
//!
//! Exports the breakdown report in human-readable YAML.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::BreakdownExport;
use crate::reports::BreakdownReport;

/// Export the breakdown report to YAML with a descriptive header
pub fn export_breakdown_yaml<W: Write>(
    report: &BreakdownReport,
    writer: &mut W,
) -> TallyResult<()> {
    let export = BreakdownExport::from_report(report);

    writeln!(writer, "# tally expense breakdown export")
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::SpendingInsights;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_export_yaml() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut insights = SpendingInsights::new();
        insights.add_expense(Expense::new(Money::from_cents(4000), date, "rent"));
        let report = BreakdownReport::from_insights(&insights);

        let mut buffer = Vec::new();
        export_breakdown_yaml(&report, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# tally expense breakdown export"));
        assert!(yaml.contains("category: rent"));
        assert!(yaml.contains("expense_count: 1"));
    }
}

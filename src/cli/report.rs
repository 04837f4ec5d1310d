//! CLI command for the expense breakdown report
//!
//! Runs the full pipeline: CSV import, ledger and insights accumulation,
//! breakdown table, chart rendering, and optional export.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::display::format::format_money_colored;
use crate::display::{ChartRenderer, TextChartRenderer};
use crate::error::{TallyError, TallyResult};
use crate::export::{export_breakdown_csv, export_breakdown_json, export_breakdown_yaml};
use crate::insights::SpendingInsights;
use crate::ledger::Ledger;
use crate::reports::BreakdownReport;
use crate::services::import::CsvSource;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the expense CSV file
    pub file: PathBuf,

    /// Show only the top N categories
    #[arg(long)]
    pub top: Option<usize>,

    /// Where to write the chart artifact (defaults to the configured path)
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_chart: bool,

    /// Export the breakdown to a file (format chosen by extension:
    /// .csv, .json, .yaml)
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

/// Handle the report command
pub fn handle_report_command(args: ReportArgs, settings: &Settings) -> TallyResult<()> {
    let source = CsvSource::new(&args.file).with_date_format(&settings.date_format);
    let import = source.read()?;

    let mut ledger = Ledger::new();
    let mut insights = SpendingInsights::new();
    for expense in import.expenses {
        ledger.add_transaction(expense.clone());
        insights.add_expense(expense);
    }

    println!(
        "Imported {} expenses from '{}'.",
        insights.expense_count(),
        args.file.display()
    );
    report_skipped(&import.skipped);
    println!();

    println!(
        "Total expenditure: {}",
        insights
            .total_expenditure()
            .format_with_symbol(&settings.currency_symbol)
    );
    println!("Balance: {}", format_money_colored(ledger.balance()));
    println!();

    let report = BreakdownReport::from_insights(&insights);

    match args.top {
        Some(limit) => print_top_categories(&report, limit),
        None => print!("{}", report.format_terminal()),
    }

    if let Some(path) = &args.export {
        export_report(&report, path)?;
        println!("Breakdown exported to '{}'.", path.display());
    }

    if report.is_empty() {
        println!("No data available to plot.");
    } else if !args.no_chart {
        let chart_path = args
            .chart
            .clone()
            .unwrap_or_else(|| PathBuf::from(&settings.chart_file));
        let renderer = TextChartRenderer::new(chart_path, settings.chart_width);
        println!();
        renderer.render(&report.to_chart("Expense Breakdown"))?;
    }

    Ok(())
}

/// Print per-row skip diagnostics
pub fn report_skipped(skipped: &[crate::services::SkippedRow]) {
    if skipped.is_empty() {
        return;
    }
    println!("Skipped {} malformed row(s):", skipped.len());
    for row in skipped {
        println!("  line {}: {}", row.line, row.reason);
    }
}

fn print_top_categories(report: &BreakdownReport, limit: usize) {
    println!("Top {} categories:", limit.min(report.slices.len()));
    for slice in report.top_categories(limit) {
        println!(
            "  {:<25} {:>12} {:>7.1}%",
            slice.label,
            slice.total.to_string(),
            slice.percentage
        );
    }
}

/// Write the breakdown to a file, choosing the format by extension
fn export_report(report: &BreakdownReport, path: &Path) -> TallyResult<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let file = File::create(path)
        .map_err(|e| TallyError::Export(format!("cannot create '{}': {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match extension.as_str() {
        "csv" => export_breakdown_csv(report, &mut writer),
        "json" => export_breakdown_json(report, &mut writer),
        "yaml" | "yml" => export_breakdown_yaml(report, &mut writer),
        other => Err(TallyError::Export(format!(
            "unsupported export format '{}' (expected csv, json, or yaml)",
            other
        ))),
    }
}

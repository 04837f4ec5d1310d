//! Expense breakdown report
//!
//! Snapshots the insights category mapping into an ordered, percentage-
//! annotated report suitable for terminal display, export, and charting.

use crate::display::chart::{BreakdownChart, ChartSlice};
use crate::insights::SpendingInsights;
use crate::models::Money;
use std::collections::BTreeMap;

/// One category's share of total spending
#[derive(Debug, Clone)]
pub struct BreakdownSlice {
    /// Category name
    pub label: String,
    /// Total spent in this category (positive magnitude)
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
    /// Share of total spending, in percent
    pub percentage: f64,
}

/// Per-category spending breakdown
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    /// Slices sorted by descending total
    pub slices: Vec<BreakdownSlice>,
    /// Sum of all expense magnitudes
    pub total_spending: Money,
    /// Total number of expenses
    pub expense_count: usize,
}

impl BreakdownReport {
    /// Build a report from the current state of the aggregator.
    ///
    /// Reading the aggregator does not change it; generating the report
    /// twice in a row yields identical output.
    pub fn from_insights(insights: &SpendingInsights) -> Self {
        let total_spending = insights.total_expenditure();

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for expense in insights.expenses() {
            *counts.entry(expense.category()).or_insert(0) += 1;
        }

        let mut slices: Vec<BreakdownSlice> = insights
            .per_category()
            .iter()
            .map(|(label, total)| BreakdownSlice {
                label: label.clone(),
                total: *total,
                count: counts.get(label.as_str()).copied().unwrap_or(0),
                percentage: percentage_of(*total, total_spending),
            })
            .collect();

        // Largest spend first; equal totals keep alphabetical order
        slices.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            slices,
            total_spending,
            expense_count: insights.expense_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// The n largest slices
    pub fn top_categories(&self, limit: usize) -> &[BreakdownSlice] {
        &self.slices[..limit.min(self.slices.len())]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Expense Breakdown\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("Total Spending: {}\n", self.total_spending));
        output.push_str(&format!("Total Expenses: {}\n\n", self.expense_count));

        output.push_str(&format!(
            "{:<25} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<25} {:>12} {:>8} {:>7.1}%\n",
                slice.label,
                slice.total.to_string(),
                slice.count,
                slice.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<25} {:>12} {:>8}\n",
            "TOTAL",
            self.total_spending.to_string(),
            self.expense_count
        ));

        output
    }

    /// Convert to the label/value pairs the chart renderer consumes
    pub fn to_chart(&self, title: impl Into<String>) -> BreakdownChart {
        BreakdownChart {
            title: title.into(),
            slices: self
                .slices
                .iter()
                .map(|slice| ChartSlice {
                    label: slice.label.clone(),
                    value: slice.total.cents() as f64 / 100.0,
                    percentage: slice.percentage,
                })
                .collect(),
        }
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / whole.cents() as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use chrono::NaiveDate;

    fn insights_with(expenses: &[(i64, &str)]) -> SpendingInsights {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut insights = SpendingInsights::new();
        for (cents, category) in expenses {
            insights.add_expense(Expense::new(Money::from_cents(*cents), date, *category));
        }
        insights
    }

    #[test]
    fn test_empty_report() {
        let report = BreakdownReport::from_insights(&SpendingInsights::new());
        assert!(report.is_empty());
        assert_eq!(report.total_spending, Money::zero());
        assert_eq!(report.expense_count, 0);
    }

    #[test]
    fn test_slices_sorted_by_descending_total() {
        let insights = insights_with(&[(1250, "food"), (725, "food"), (4000, "rent")]);
        let report = BreakdownReport::from_insights(&insights);

        assert_eq!(report.slices.len(), 2);
        assert_eq!(report.slices[0].label, "rent");
        assert_eq!(report.slices[0].total.cents(), 4000);
        assert_eq!(report.slices[0].count, 1);
        assert_eq!(report.slices[1].label, "food");
        assert_eq!(report.slices[1].total.cents(), 1975);
        assert_eq!(report.slices[1].count, 2);
    }

    #[test]
    fn test_percentages() {
        let insights = insights_with(&[(7500, "rent"), (2500, "food")]);
        let report = BreakdownReport::from_insights(&insights);

        assert!((report.slices[0].percentage - 75.0).abs() < 1e-9);
        assert!((report.slices[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_generation_is_repeatable() {
        let insights = insights_with(&[(1250, "food"), (4000, "rent")]);
        let a = BreakdownReport::from_insights(&insights);
        let b = BreakdownReport::from_insights(&insights);

        let labels_a: Vec<_> = a.slices.iter().map(|s| s.label.as_str()).collect();
        let labels_b: Vec<_> = b.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels_a, labels_b);
        assert_eq!(a.total_spending, b.total_spending);
    }

    #[test]
    fn test_top_categories() {
        let insights = insights_with(&[(100, "a"), (300, "b"), (200, "c")]);
        let report = BreakdownReport::from_insights(&insights);

        let top = report.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label, "b");
        assert_eq!(top[1].label, "c");

        // Limit past the end is clamped
        assert_eq!(report.top_categories(10).len(), 3);
    }

    #[test]
    fn test_format_terminal() {
        let insights = insights_with(&[(1250, "food"), (725, "food"), (4000, "rent")]);
        let output = BreakdownReport::from_insights(&insights).format_terminal();

        assert!(output.contains("rent"));
        assert!(output.contains("$40.00"));
        assert!(output.contains("$19.75"));
        assert!(output.contains("Total Spending: $59.75"));
    }

    #[test]
    fn test_to_chart() {
        let insights = insights_with(&[(7500, "rent"), (2500, "food")]);
        let chart = BreakdownReport::from_insights(&insights).to_chart("Monthly Breakdown");

        assert_eq!(chart.title, "Monthly Breakdown");
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].label, "rent");
        assert!((chart.slices[0].value - 75.0).abs() < 1e-9);
        assert!((chart.slices[0].percentage - 75.0).abs() < 1e-9);
    }
}

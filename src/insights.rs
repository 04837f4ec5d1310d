//! Spending insights accumulation
//!
//! Consumes expenses and maintains cumulative spending totals per
//! category. Rendering lives in `reports` and `display`; this module has
//! no output dependencies.

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Accumulates expenses and per-category spending totals.
///
/// The category mapping holds positive magnitudes: for every category the
/// mapped value equals the sum of magnitudes of all expenses with that
/// category added so far.
#[derive(Debug, Clone, Default)]
pub struct SpendingInsights {
    expenses: Vec<Expense>,
    per_category: BTreeMap<String, Money>,
}

impl SpendingInsights {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense, updating the running total for its category
    pub fn add_expense(&mut self, expense: Expense) {
        let entry = self
            .per_category
            .entry(expense.category().to_string())
            .or_insert_with(Money::zero);
        *entry += expense.magnitude();
        self.expenses.push(expense);
    }

    /// Total spent across all recorded expenses, as a non-negative amount.
    ///
    /// Sums magnitudes, not signed amounts. The record count is available
    /// separately from [`expense_count`](Self::expense_count).
    pub fn total_expenditure(&self) -> Money {
        self.expenses.iter().map(Expense::magnitude).sum()
    }

    /// Number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Read-only view of the category mapping (category → cumulative
    /// positive magnitude), ordered by category name.
    pub fn per_category(&self) -> &BTreeMap<String, Money> {
        &self.per_category
    }

    /// Iterate the recorded expenses in insertion order
    pub fn expenses(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }
}

//! tally - Personal finance ledger CLI
//!
//! This library provides the core functionality for the tally expense
//! tracker: CSV expense import, an ordered transaction ledger with a
//! running balance, per-category spending insights, and breakdown chart
//! reporting.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions)
//! - `ledger`: Ordered transaction record and balance
//! - `insights`: Per-category spending accumulation
//! - `services`: Data-source boundary (CSV import)
//! - `reports`: Breakdown report generation
//! - `display`: Terminal formatting and chart rendering
//! - `export`: Breakdown export (CSV/JSON/YAML)
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::insights::SpendingInsights;
//! use tally::services::import::CsvSource;
//! use tally::services::import::ExpenseSource;
//!
//! let source = CsvSource::new("expenses.csv");
//! let mut insights = SpendingInsights::new();
//! for expense in source.all_expenses()? {
//!     insights.add_expense(expense);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TallyError, TallyResult};

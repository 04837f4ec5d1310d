//! Business logic layer
//!
//! Bridges external data sources to the core ledger and insights types.

pub mod import;

pub use import::{ColumnMapping, CsvImport, CsvSource, ExpenseSource, SkippedRow};

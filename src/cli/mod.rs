//! CLI command handlers
//!
//! Bridges the clap argument parsing with the core ledger and reporting
//! layers.

pub mod balance;
pub mod report;

pub use balance::{handle_balance_command, BalanceArgs};
pub use report::{handle_report_command, ReportArgs};

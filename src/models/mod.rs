//! Core data models for tally
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts and the transaction variants.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{Expense, Income, Transaction, TransactionValidationError};

//! Ledger model
//!
//! The ledger is the ordered record of all transactions and the source of
//! truth for the running balance.

use crate::models::{Money, Transaction};

/// Append-only, insertion-ordered record of transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Accepts any variant; no validation.
    pub fn add_transaction(&mut self, transaction: impl Into<Transaction>) {
        self.transactions.push(transaction.into());
    }

    /// The sum of all stored signed amounts.
    ///
    /// Income adds, expenses subtract; the sign is already baked into each
    /// stored amount. Recomputed on every call.
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate the transactions in insertion order
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}

//! CLI command for the ledger balance

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format::format_money_colored;
use crate::error::TallyResult;
use crate::ledger::Ledger;
use crate::services::import::CsvSource;

use super::report::report_skipped;

/// Arguments for the balance command
#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Path to the expense CSV file
    pub file: PathBuf,
}

/// Handle the balance command
pub fn handle_balance_command(args: BalanceArgs, settings: &Settings) -> TallyResult<()> {
    let source = CsvSource::new(&args.file).with_date_format(&settings.date_format);
    let import = source.read()?;

    let mut ledger = Ledger::new();
    for expense in import.expenses {
        ledger.add_transaction(expense);
    }

    println!(
        "Imported {} transactions from '{}'.",
        ledger.len(),
        args.file.display()
    );
    report_skipped(&import.skipped);
    println!("Balance: {}", format_money_colored(ledger.balance()));

    Ok(())
}

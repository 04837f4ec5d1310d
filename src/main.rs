use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{handle_balance_command, handle_report_command, BalanceArgs, ReportArgs};
use tally::config::{paths::TallyPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "tally is a personal finance ledger. It imports expenses from a \
                  CSV file, tracks the running balance, aggregates spending per \
                  category, and renders an expense breakdown chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Import expenses and show the category breakdown
    #[command(alias = "breakdown")]
    Report(ReportArgs),

    /// Import expenses and show the ledger balance
    Balance(BalanceArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(args, &settings)?;
        }
        Some(Commands::Balance(args)) => {
            handle_balance_command(args, &settings)?;
        }
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Chart file:      {}", settings.chart_file);
            println!("  Chart width:     {}", settings.chart_width);
        }
        None => {
            println!("tally - Personal finance ledger for the terminal");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally report <file.csv>' to analyze an expense file.");
        }
    }

    Ok(())
}

//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_log};
use crate::error::TallyResult;
use crate::models::category::INCOME;
use crate::models::Amount;
use crate::reports::LedgerSummary;
use crate::services::{CategoryService, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount (e.g. "5000", "-12.50"); expense categories always subtract
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category identifier (built-in value or custom name)
        #[arg(short, long, default_value = INCOME)]
        category: String,
    },

    /// Show the transaction log and the running total
    List,

    /// Take money out of savings
    Withdraw {
        /// Amount to withdraw; stored negated under savings
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let service = TransactionService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
        } => {
            let amount = Amount::parse(&amount)?;
            let txn = service.add(&description, amount, &category)?;
            let registry = CategoryService::new(storage).registry()?;

            println!("Recorded transaction:");
            print!("{}", format_transaction_details(&txn, &registry, currency));
        }

        TransactionCommands::List => {
            let summary = LedgerSummary::generate(storage)?;
            print!("{}", format_transaction_log(&summary, currency));
        }

        TransactionCommands::Withdraw { amount } => {
            let amount = Amount::parse(&amount)?;
            let txn = service.add_savings_withdrawal(amount)?;
            println!(
                "{}: {}",
                txn.description,
                txn.amount.format_with_symbol(currency)
            );
        }
    }

    Ok(())
}

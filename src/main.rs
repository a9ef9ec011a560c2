use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tally::cli::{
    handle_audit_command, handle_category_command, handle_chart_command, handle_export_command,
    handle_period_command, handle_total_command, handle_transaction_command, handle_verify_command,
    CategoryCommands, ExportFormat, TransactionCommands,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::logging::{init_tracing, LogTarget};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal personal finance ledger",
    long_about = "tally records income, expenses and savings, keeps a running total \
                  and shows where the money goes as a pie chart of expenses by category."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show the running total
    Total,

    /// Show the expense breakdown by category
    Chart {
        /// Width of the drawing surface
        #[arg(long, default_value = "400")]
        width: u32,
        /// Height of the drawing surface
        #[arg(long, default_value = "400")]
        height: u32,
    },

    /// Show the month label
    Period {
        /// Starting month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Move forward this many months
        #[arg(long, conflicts_with = "prev")]
        next: Option<u32>,
        /// Move back this many months
        #[arg(long)]
        prev: Option<u32>,
    },

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a JSON or YAML export can be read back
    Verify {
        /// Export file to check
        file: PathBuf,
        /// Export format (guessed from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let is_tui = matches!(cli.command, Some(Commands::Tui));
    if is_tui {
        paths.ensure_directories()?;
        let log_file = paths.diagnostic_log();
        init_tracing(cli.verbose, LogTarget::File(&log_file));
    } else {
        init_tracing(cli.verbose, LogTarget::Stderr);
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "storage loaded");

    match cli.command {
        Some(Commands::Tui) => {
            tally::tui::run_tui(&storage, &settings, &paths)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Total) => {
            handle_total_command(&storage, &settings)?;
        }
        Some(Commands::Chart { width, height }) => {
            handle_chart_command(&storage, &settings, width, height)?;
        }
        Some(Commands::Period { month, next, prev }) => {
            handle_period_command(month, next, prev)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::Verify { file, format }) => {
            handle_verify_command(&file, format)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Diagnostic log:   {}", paths.diagnostic_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Dark mode:       {}", settings.dark_mode);
            println!("  Chart max size:  {}", settings.chart_max_size);
        }
        None => {
            println!("tally - terminal personal finance ledger");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

//! Report CLI commands
//!
//! The running total and the expense chart legend.

use crate::config::Settings;
use crate::display::chart::format_chart_legend;
use crate::display::transaction::format_total;
use crate::error::TallyResult;
use crate::reports::{ChartGeometry, LedgerSummary};
use crate::storage::Storage;

/// Print the running total
pub fn handle_total_command(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let summary = LedgerSummary::generate(storage)?;
    println!("{}", format_total(&summary, &settings.currency_symbol));
    Ok(())
}

/// Print the expense breakdown as a sector legend
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    width: u32,
    height: u32,
) -> TallyResult<()> {
    let summary = LedgerSummary::generate(storage)?;
    let geometry = ChartGeometry::for_surface(
        f64::from(width),
        f64::from(height),
        f64::from(settings.chart_max_size),
    );
    let chart = summary.chart(&geometry);

    println!(
        "{}",
        format_chart_legend(&summary, &chart, &settings.currency_symbol)
    );
    Ok(())
}

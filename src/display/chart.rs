//! Chart legend formatting
//!
//! The terminal stand-in for the pie: one table row per sector.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{LedgerSummary, PieChart, NO_DATA_MESSAGE};

#[derive(Tabled)]
struct LegendRow {
    #[tabled(rename = "Color")]
    color: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "Sweep")]
    sweep: String,
}

/// Format the sector legend, or the no-data message
pub fn format_chart_legend(
    summary: &LedgerSummary,
    chart: &PieChart,
    currency_symbol: &str,
) -> String {
    let sectors = match chart {
        PieChart::NoData => return NO_DATA_MESSAGE.to_string(),
        PieChart::Sectors(sectors) => sectors,
    };

    let rows = sectors.iter().zip(&summary.expenses).map(|(sector, entry)| LegendRow {
        color: sector.color_hex(),
        category: summary.label_for(&sector.label),
        amount: entry.magnitude.format_with_symbol(currency_symbol),
        share: format!("{:.1}%", sector.percentage()),
        start: format!("{:.3}", sector.start_angle),
        sweep: format!("{:.3}", sector.sweep_angle),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, CategoryRegistry, Transaction};
    use crate::reports::ChartGeometry;

    #[test]
    fn test_no_data() {
        let summary = LedgerSummary::from_parts(&[], CategoryRegistry::default());
        let chart = summary.chart(&ChartGeometry::for_surface(400.0, 400.0, 400.0));
        assert_eq!(format_chart_legend(&summary, &chart, "Ft"), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_legend_rows() {
        let transactions = vec![
            Transaction::new("Bolt", Amount::new(300.0).unwrap(), "kiadás"),
            Transaction::new("Fizetés", Amount::new(1000.0).unwrap(), "bevétel"),
        ];
        let summary = LedgerSummary::from_parts(&transactions, CategoryRegistry::default());
        let chart = summary.chart(&ChartGeometry::for_surface(400.0, 400.0, 400.0));
        let output = format_chart_legend(&summary, &chart, "Ft");

        assert!(output.contains("#FF6384"));
        assert!(output.contains("🛒 Kiadás"));
        assert!(output.contains("300 Ft"));
        assert!(output.contains("100.0%"));
        assert!(!output.contains("Bevétel"));
    }
}

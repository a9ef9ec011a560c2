//! Layout definitions for the TUI
//!
//! Period header on top, transaction log and chart side by side, status bar
//! at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Month label and navigation hints
    pub header: Rect,
    /// Transaction log and running total
    pub log: Rect,
    /// Expense pie chart and legend
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            log: horizontal[0],
            chart: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the chart panel
pub struct ChartLayout {
    pub canvas: Rect,
    pub legend: Rect,
}

impl ChartLayout {
    /// Legend gets one row per entry, capped so the pie keeps most of the panel
    pub fn new(area: Rect, legend_rows: u16) -> Self {
        let legend_height = (legend_rows + 2).min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(legend_height)])
            .split(area);

        Self {
            canvas: chunks[0],
            legend: chunks[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.log.width + layout.chart.width, 100);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(60, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(r, Rect::new(0, 0, 40, 8));

        let r = centered_rect_fixed(20, 4, Rect::new(0, 0, 40, 10));
        assert_eq!(r, Rect::new(10, 3, 20, 4));
    }
}

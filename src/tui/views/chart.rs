//! Expense pie chart view
//!
//! The pie is drawn on a braille `Canvas`. Each braille dot inside the
//! circle is assigned to the sector covering its angle. Layout angles use
//! screen coordinates (y down) while the canvas y axis points up, so y is
//! flipped when plotting.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::reports::{ChartGeometry, PieChart, SectorDescriptor, NO_DATA_MESSAGE};
use crate::tui::app::App;
use crate::tui::layout::ChartLayout;

/// Braille dots per terminal cell
const DOTS_PER_COLUMN: f64 = 2.0;
const DOTS_PER_ROW: f64 = 4.0;

/// Dots of one sector, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectorDots {
    pub color: Color,
    pub coords: Vec<(f64, f64)>,
}

/// Assign every dot inside the pie to its sector
pub fn sample_sectors(
    chart: &PieChart,
    geometry: &ChartGeometry,
    width: f64,
    height: f64,
) -> Vec<SectorDots> {
    let mut dots: Vec<SectorDots> = chart
        .sectors()
        .iter()
        .map(|s| SectorDots {
            color: sector_color(s),
            coords: Vec::new(),
        })
        .collect();

    let r2 = geometry.radius * geometry.radius;
    let columns = width.ceil() as usize;
    let rows = height.ceil() as usize;

    for py in 0..rows {
        let sy = py as f64 + 0.5;
        let dy = sy - geometry.center_y;
        for px in 0..columns {
            let sx = px as f64 + 0.5;
            let dx = sx - geometry.center_x;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let angle = dy.atan2(dx);
            if let Some(i) = chart.sector_at(angle) {
                dots[i].coords.push((sx, height - sy));
            }
        }
    }

    dots
}

fn sector_color(sector: &SectorDescriptor) -> Color {
    let (r, g, b) = sector.color_rgb();
    Color::Rgb(r, g, b)
}

/// Render the chart panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let block = Block::default()
        .title(" Kiadások ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = ChartLayout::new(inner, app.summary.expenses.len() as u16);

    let width = f64::from(layout.canvas.width) * DOTS_PER_COLUMN;
    let height = f64::from(layout.canvas.height) * DOTS_PER_ROW;
    let max_size = f64::from(app.settings.chart_max_size);
    let geometry = ChartGeometry::for_surface(width, height, max_size);
    let chart = app.summary.chart(&geometry);

    if chart.is_empty() {
        let message =
            Paragraph::new(Span::styled(NO_DATA_MESSAGE, Style::default().fg(theme.muted)))
                .alignment(Alignment::Center);
        let y = layout.canvas.y + layout.canvas.height / 2;
        frame.render_widget(message, Rect::new(layout.canvas.x, y, layout.canvas.width, 1));
        return;
    }

    let dots = sample_sectors(&chart, &geometry, width, height);
    let labels: Vec<(f64, f64, String)> = chart
        .sectors()
        .iter()
        .map(|s| (s.label_x, height - s.label_y, app.summary.label_for(&s.label)))
        .collect();
    let label_style = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for sector in &dots {
                ctx.draw(&Points {
                    coords: &sector.coords,
                    color: sector.color,
                });
            }
            ctx.layer();
            for (x, y, text) in &labels {
                ctx.print(*x, *y, Span::styled(text.clone(), label_style));
            }
        });
    frame.render_widget(canvas, layout.canvas);

    let currency = app.settings.currency_symbol.as_str();
    let legend: Vec<Line> = chart
        .sectors()
        .iter()
        .zip(&app.summary.expenses)
        .map(|(sector, entry)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(sector_color(sector))),
                Span::styled(
                    app.summary.label_for(&sector.label),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(
                    format!(
                        "  {}  {:.1}%",
                        entry.magnitude.format_with_symbol(currency),
                        sector.percentage()
                    ),
                    Style::default().fg(theme.muted),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), layout.legend);
}

//! Pie chart layout
//!
//! Turns an expense aggregation into angular sectors. Angles are in radians,
//! start at 0 and run clockwise in screen coordinates (y grows downward), so
//! renderers with an upward y axis must flip it.

use std::f64::consts::TAU;

use super::aggregate::CategoryTotal;

/// Sector colors, cycled by aggregation position
pub const CHART_PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#66FF66", "#FF6666",
];

/// Shown instead of a chart when there is nothing to draw
pub const NO_DATA_MESSAGE: &str = "Nincs elég adat a grafikonhoz";

/// Default upper bound for the drawing surface
pub const DEFAULT_MAX_SURFACE: f64 = 400.0;

const RADIUS_MARGIN: f64 = 20.0;

/// Where the pie sits on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl ChartGeometry {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// Fit a pie into a `width` x `height` surface, each side capped at `max_size`
    pub fn for_surface(width: f64, height: f64, max_size: f64) -> Self {
        let w = width.min(max_size).max(0.0);
        let h = height.min(max_size).max(0.0);
        let radius = (w.min(h) / 2.0 - RADIUS_MARGIN).max(0.0);

        Self::new(w / 2.0, h / 2.0, radius)
    }
}

/// One wedge of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct SectorDescriptor {
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color_index: usize,
    /// Category identifier of the aggregation entry
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

impl SectorDescriptor {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Share of the full circle, 0.0..=1.0
    pub fn fraction(&self) -> f64 {
        self.sweep_angle / TAU
    }

    /// Share of the full circle as a percentage
    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn color_hex(&self) -> &'static str {
        CHART_PALETTE[self.color_index % CHART_PALETTE.len()]
    }

    pub fn color_rgb(&self) -> (u8, u8, u8) {
        hex_to_rgb(self.color_hex()).unwrap_or((255, 255, 255))
    }

    /// Whether `angle` (radians, any winding) falls inside this wedge
    pub fn contains_angle(&self, angle: f64) -> bool {
        let a = angle.rem_euclid(TAU);
        a >= self.start_angle && a < self.end_angle()
    }
}

/// Result of laying out a pie
#[derive(Debug, Clone, PartialEq)]
pub enum PieChart {
    /// Total magnitude is zero; render [`NO_DATA_MESSAGE`]
    NoData,
    Sectors(Vec<SectorDescriptor>),
}

impl PieChart {
    pub fn sectors(&self) -> &[SectorDescriptor] {
        match self {
            Self::NoData => &[],
            Self::Sectors(sectors) => sectors,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Position of the sector covering `angle`, if any
    pub fn sector_at(&self, angle: f64) -> Option<usize> {
        self.sectors().iter().position(|s| s.contains_angle(angle))
    }
}

/// Lay out sectors proportional to each entry's share of the total
///
/// Shares are computed relative to the largest magnitude so that totals
/// beyond `f64::MAX` still split the circle correctly.
pub fn layout(aggregation: &[CategoryTotal], geometry: &ChartGeometry) -> PieChart {
    let largest = aggregation
        .iter()
        .map(|entry| entry.magnitude.value())
        .fold(0.0, f64::max);
    if largest == 0.0 {
        return PieChart::NoData;
    }
    let shares: Vec<f64> = aggregation
        .iter()
        .map(|entry| entry.magnitude.value() / largest)
        .collect();
    let total: f64 = shares.iter().sum();

    let label_radius = geometry.radius / 2.0;
    let mut start_angle = 0.0;
    let sectors = aggregation
        .iter()
        .zip(&shares)
        .enumerate()
        .map(|(i, (entry, share))| {
            let sweep_angle = TAU * share / total;
            let mid = start_angle + sweep_angle / 2.0;
            let sector = SectorDescriptor {
                start_angle,
                sweep_angle,
                color_index: i % CHART_PALETTE.len(),
                label: entry.category.clone(),
                label_x: geometry.center_x + label_radius * mid.cos(),
                label_y: geometry.center_y + label_radius * mid.sin(),
            };
            start_angle += sweep_angle;
            sector
        })
        .collect();

    PieChart::Sectors(sectors)
}

/// Parse "#RRGGBB"
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

//! Per-residue pLDDT line chart.
//!
//! Builds the ordered `(residue index, score)` series the charting surface
//! consumes and renders it as a PNG line plot with fixed reference lines at
//! the 90/70/50 tier boundaries, each drawn in its tier color.

use std::path::Path;

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::PathElement;
use plotters::series::LineSeries;
use plotters::style::{Color, RGBColor, WHITE};

use crate::error::ViewerError;
use crate::tier::ConfidenceTier;

/// Stroke color for the score trace (dark gray).
const TRACE_COLOR: RGBColor = RGBColor(51, 51, 51);

/// Ordered pLDDT series, 1-based residue indices in residue order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlddtSeries {
    points: Vec<(u32, f64)>,
}

impl PlddtSeries {
    /// Build the series from per-residue scores. Returns `None` for an
    /// empty score array (the "no data" case).
    #[must_use]
    pub fn new(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let points = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| (i as u32 + 1, score))
            .collect();
        Some(Self { points })
    }

    /// The `(residue index, score)` pairs, residue indices starting at 1.
    #[must_use]
    pub fn points(&self) -> &[(u32, f64)] {
        &self.points
    }

    /// Number of residues in the series.
    #[must_use]
    pub fn residues(&self) -> u32 {
        self.points.len() as u32
    }

    /// Mean score over the series.
    #[must_use]
    pub fn average(&self) -> f64 {
        let sum: f64 = self.points.iter().map(|&(_, s)| s).sum();
        sum / f64::from(self.residues())
    }
}

/// Tier boundaries drawn as horizontal reference lines, top first.
/// VeryLow has no line: it is the region below the lowest boundary.
const REFERENCE_TIERS: [ConfidenceTier; 3] = [
    ConfidenceTier::VeryHigh,
    ConfidenceTier::High,
    ConfidenceTier::Low,
];

/// Render the scores as a line chart PNG of the given pixel size.
///
/// Returns `Ok(false)` without writing anything when the score array is
/// empty.
pub fn save_png(
    scores: &[f64],
    path: &Path,
    size: (u32, u32),
) -> Result<bool, ViewerError> {
    let Some(series) = PlddtSeries::new(scores) else {
        return Ok(false);
    };

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let caption = format!(
        "Predicted LDDT per Position (avg {:.2})",
        series.average()
    );
    let x_max = series.residues().max(2);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(1_u32..x_max, 0.0_f64..100.0_f64)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Residue Index")
        .y_desc("pLDDT")
        .draw()
        .map_err(chart_err)?;

    for tier in REFERENCE_TIERS {
        let [r, g, b] = tier.color();
        let y = tier.lower_bound();
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(1, y), (x_max, y)],
                RGBColor(r, g, b).stroke_width(1),
            )))
            .map_err(chart_err)?
            .label(tier.label());
    }

    chart
        .draw_series(LineSeries::new(
            series.points().iter().copied(),
            TRACE_COLOR.stroke_width(2),
        ))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(true)
}

fn chart_err<E: std::fmt::Display>(e: E) -> ViewerError {
    ViewerError::Chart(e.to_string())
}

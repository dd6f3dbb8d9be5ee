//! Entropy heatmap - nominal entropy across length and charset tiers.

use std::path::Path;

use plotters::prelude::*;

use super::{PlotError, render_err};
use crate::analysis::nominal_entropy;
use crate::charset::CharsetTier;

/// Password lengths covered by the heatmap columns.
pub const HEATMAP_LENGTHS: std::ops::RangeInclusive<usize> = 4..=20;

/// Maps a normalized entropy in `[0, 1]` to a cell color, sweeping hue
/// from blue (low) to yellow-green (high) and brightening along the way.
fn cell_shade(t: f64) -> HSLColor {
    let t = t.clamp(0.0, 1.0);
    HSLColor(240.0 / 360.0 - 140.0 / 360.0 * t, 0.7, 0.15 + 0.45 * t)
}

/// Renders the entropy heatmap: rows are the four charset tiers, columns
/// the lengths in [`HEATMAP_LENGTHS`], and each cell is shaded by the
/// nominal entropy of that combination.
pub fn plot_entropy_heatmap(path: &Path) -> Result<(), PlotError> {
    let lengths: Vec<usize> = HEATMAP_LENGTHS.collect();
    let tiers = CharsetTier::ALL;

    let mut cells = Vec::with_capacity(tiers.len() * lengths.len());
    for (row, tier) in tiers.iter().enumerate() {
        for (col, &length) in lengths.iter().enumerate() {
            cells.push((row, col, nominal_entropy(length, tier.alphabet_size())));
        }
    }
    let max_entropy = cells.iter().map(|&(_, _, v)| v).fold(0.0, f64::max);

    let root = SVGBackend::new(path, (800, 420)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Password Entropy Heatmap", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(160)
        .build_cartesian_2d(
            -0.5..lengths.len() as f64 - 0.5,
            -0.5..tiers.len() as f64 - 0.5,
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(lengths.len())
        .y_labels(tiers.len())
        .x_label_formatter(&|x| {
            let i = x.round();
            if i < 0.0 || (x - i).abs() > 0.25 {
                return String::new();
            }
            lengths
                .get(i as usize)
                .map(|l| l.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| {
            let i = y.round();
            if i < 0.0 || (y - i).abs() > 0.25 {
                return String::new();
            }
            tiers
                .get(i as usize)
                .map(|t| t.label().to_string())
                .unwrap_or_default()
        })
        .x_desc("Password Length")
        .y_desc("Charset Complexity")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(cells.iter().map(|&(row, col, value)| {
            let shade = cell_shade(value / max_entropy);
            Rectangle::new(
                [
                    (col as f64 - 0.5, row as f64 - 0.5),
                    (col as f64 + 0.5, row as f64 + 0.5),
                ],
                shade.filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;

    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), "entropy heatmap rendered");

    Ok(())
}

//! Strength gauge - stacked threshold bar with an entropy marker.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;

use super::{PlotError, render_err};
use crate::analysis::STRENGTH_THRESHOLDS;

/// Renders the strength gauge for the given entropy to an SVG file.
///
/// Segments span the category thresholds in red, orange, yellow and green.
/// An overflow segment past the last threshold is drawn in blue only when
/// the entropy actually exceeds it (below the threshold it would have
/// negative width and render nothing). A black dot marks the entropy.
pub fn plot_strength_gauge(entropy: f64, path: &Path) -> Result<(), PlotError> {
    let x_max = (entropy * 1.1).max(STRENGTH_THRESHOLDS[3] * 1.1);

    let root = SVGBackend::new(path, (640, 180)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Password Strength Gauge", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(28)
        .build_cartesian_2d(0.0..x_max, -1.0..1.0)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_desc("Entropy (bits)")
        .draw()
        .map_err(render_err)?;

    let segments = [
        (0.0, STRENGTH_THRESHOLDS[0], RED),
        (STRENGTH_THRESHOLDS[0], STRENGTH_THRESHOLDS[1], ORANGE),
        (STRENGTH_THRESHOLDS[1], STRENGTH_THRESHOLDS[2], YELLOW),
        (STRENGTH_THRESHOLDS[2], STRENGTH_THRESHOLDS[3], GREEN),
    ];
    for (start, end, color) in segments {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(start, -0.45), (end, 0.45)],
                color.filled(),
            )))
            .map_err(render_err)?;
    }

    if entropy > STRENGTH_THRESHOLDS[3] {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(STRENGTH_THRESHOLDS[3], -0.45), (entropy, 0.45)],
                BLUE.filled(),
            )))
            .map_err(render_err)?;
    }

    chart
        .draw_series(std::iter::once(Circle::new(
            (entropy, 0.0),
            6,
            BLACK.filled(),
        )))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;

    #[cfg(feature = "tracing")]
    tracing::info!(entropy, path = %path.display(), "strength gauge rendered");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_renders_file() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let path = tmp.path().join("gauge.svg");

        plot_strength_gauge(104.2, &path).expect("Failed to render gauge");

        let meta = std::fs::metadata(&path).expect("Missing gauge file");
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_gauge_with_overflow_entropy() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let path = tmp.path().join("gauge_overflow.svg");

        plot_strength_gauge(150.0, &path).expect("Failed to render gauge");
        assert!(path.exists());
    }

    #[test]
    fn test_gauge_with_zero_entropy() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let path = tmp.path().join("gauge_zero.svg");

        plot_strength_gauge(0.0, &path).expect("Failed to render gauge");
        assert!(path.exists());
    }
}

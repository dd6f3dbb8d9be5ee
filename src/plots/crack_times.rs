//! Crack-time chart - one bar per attacker profile on a log-scale axis.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;

use super::{PlotError, render_err};
use crate::analysis::{ATTACK_PROFILES, crack_time};

const BAR_COLORS: [RGBColor; 3] = [RED, ORANGE, GREEN];

/// Renders crack-time bars for the fixed attacker profiles at the given
/// entropy, seconds on a logarithmic vertical axis.
pub fn plot_crack_times(entropy: f64, path: &Path) -> Result<(), PlotError> {
    let times = ATTACK_PROFILES
        .iter()
        .map(|p| crack_time(entropy, p.guesses_per_second))
        .collect::<Result<Vec<f64>, _>>()
        .map_err(render_err)?;

    // A log axis needs strictly positive, non-degenerate bounds.
    let y_min = (times.iter().copied().fold(f64::INFINITY, f64::min) / 10.0).max(1e-18);
    let y_max = times.iter().copied().fold(0.0, f64::max).max(1e-12) * 10.0;

    let root = SVGBackend::new(path, (640, 420)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Estimated Crack Times", ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(10)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..ATTACK_PROFILES.len() as f64, (y_min..y_max).log_scale())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_desc("Time to Crack (seconds, log scale)")
        .draw()
        .map_err(render_err)?;

    for (i, (profile, seconds)) in ATTACK_PROFILES.iter().zip(&times).enumerate() {
        let color = BAR_COLORS[i];
        let x0 = i as f64 + 0.2;
        let x1 = i as f64 + 0.8;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0, y_min), (x1, *seconds)],
                color.filled(),
            )))
            .map_err(render_err)?
            .label(profile.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;

    #[cfg(feature = "tracing")]
    tracing::info!(entropy, path = %path.display(), "crack-time chart rendered");

    Ok(())
}

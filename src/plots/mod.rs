//! Chart rendering
//!
//! Three independent routines, each rendering one SVG chart to a file:
//! the strength gauge, the crack-time bars, and the entropy heatmap.

use std::path::PathBuf;

use thiserror::Error;

mod crack_times;
mod gauge;
mod heatmap;

pub use crack_times::plot_crack_times;
pub use gauge::plot_strength_gauge;
pub use heatmap::{HEATMAP_LENGTHS, plot_entropy_heatmap};

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to create plot directory: {0}")]
    CreateDir(#[from] std::io::Error),
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// Shrinks plotters' generic backend errors down to one renderable message.
pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Returns the chart output directory.
///
/// Priority:
/// 1. Environment variable `PWD_PLOT_DIR`
/// 2. Default path `./plots`
pub fn plot_dir() -> PathBuf {
    std::env::var("PWD_PLOT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./plots"))
}

/// Creates the chart output directory if missing and returns its path.
pub fn ensure_plot_dir() -> Result<PathBuf, PlotError> {
    let dir = plot_dir();
    std::fs::create_dir_all(&dir)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(dir = %dir.display(), "plot directory ready");

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_plot_dir_default() {
        remove_env("PWD_PLOT_DIR");

        assert_eq!(plot_dir(), PathBuf::from("./plots"));
    }

    #[test]
    #[serial]
    fn test_plot_dir_from_env() {
        set_env("PWD_PLOT_DIR", "/tmp/custom-charts");

        assert_eq!(plot_dir(), PathBuf::from("/tmp/custom-charts"));

        remove_env("PWD_PLOT_DIR");
    }

    #[test]
    #[serial]
    fn test_ensure_plot_dir_creates_missing() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let nested = tmp.path().join("charts/out");
        set_env("PWD_PLOT_DIR", nested.to_str().unwrap());

        let dir = ensure_plot_dir().expect("Failed to create plot dir");
        assert_eq!(dir, nested);
        assert!(nested.is_dir());

        remove_env("PWD_PLOT_DIR");
    }
}

//! Password generation and entropy estimation library
//!
//! Generates random passwords from configurable character classes,
//! estimates their entropy, classifies strength against fixed thresholds,
//! estimates crack times under fixed attacker speed models, and renders
//! the results as SVG charts (strength gauge, crack-time bars, entropy
//! heatmap).
//!
//! # Features
//!
//! - `plots` (default): Enables chart rendering via plotters
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PLOT_DIR`: Output directory for rendered charts
//!   (default: `./plots`)
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{GeneratorOptions, analyze_password, generate_password};
//!
//! let options = GeneratorOptions {
//!     length: 16,
//!     ..Default::default()
//! };
//! let password = generate_password(&options).expect("lowercase is always selected");
//!
//! let report = analyze_password(&password).expect("built-in guess rates are positive");
//! println!("Entropy: {:.2} bits", report.entropy_bits);
//! println!("Strength: {}", report.category);
//! ```

// Internal modules
mod analysis;
mod charset;
mod generator;
mod report;

#[cfg(feature = "plots")]
mod plots;

// Public API
pub use analysis::{
    ATTACK_PROFILES, AttackProfile, CrackTimeError, STRENGTH_THRESHOLDS, StrengthCategory,
    crack_time, format_time, nominal_entropy, password_entropy, strength_category,
};
pub use charset::{CharsetTier, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use generator::{GeneratorError, GeneratorOptions, generate_password, generate_password_with};
pub use report::{PasswordReport, analyze_password};

#[cfg(feature = "plots")]
pub use plots::{
    HEATMAP_LENGTHS, PlotError, ensure_plot_dir, plot_crack_times, plot_dir, plot_entropy_heatmap,
    plot_strength_gauge,
};

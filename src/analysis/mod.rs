//! Password analysis passes
//!
//! Each pass derives one quantity: entropy from a password, a strength
//! category from an entropy value, or a crack-time estimate from entropy
//! and an attacker guess rate.

mod crack;
mod entropy;
mod strength;

pub use crack::{ATTACK_PROFILES, AttackProfile, CrackTimeError, crack_time, format_time};
pub use entropy::{nominal_entropy, password_entropy};
pub use strength::{STRENGTH_THRESHOLDS, StrengthCategory, strength_category};

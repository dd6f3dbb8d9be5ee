//! Crack-time estimation under fixed attacker speed models.

use thiserror::Error;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const MILLENNIUM: f64 = 3.154e12;

#[derive(Error, Debug, PartialEq)]
pub enum CrackTimeError {
    #[error("guess rate must be a positive finite number, got {0}")]
    InvalidGuessRate(f64),
}

/// A named attacker speed model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub label: &'static str,
    pub guesses_per_second: f64,
}

/// The attacker profiles reported by the demo binary and the crack-time
/// chart, slowest first.
pub const ATTACK_PROFILES: [AttackProfile; 3] = [
    AttackProfile {
        label: "Online (1e3/s)",
        guesses_per_second: 1e3,
    },
    AttackProfile {
        label: "Offline (1e9/s)",
        guesses_per_second: 1e9,
    },
    AttackProfile {
        label: "GPU Rig (1e12/s)",
        guesses_per_second: 1e12,
    },
];

/// Expected seconds to crack a password of the given entropy.
///
/// Models an exhaustive search that finds the password halfway through the
/// keyspace on average: `2^entropy / (2 * guesses_per_second)`.
///
/// # Errors
///
/// Returns [`CrackTimeError::InvalidGuessRate`] for a non-positive or
/// non-finite guess rate.
pub fn crack_time(entropy_bits: f64, guesses_per_second: f64) -> Result<f64, CrackTimeError> {
    if guesses_per_second.is_nan()
        || guesses_per_second.is_infinite()
        || guesses_per_second <= 0.0
    {
        return Err(CrackTimeError::InvalidGuessRate(guesses_per_second));
    }
    Ok(entropy_bits.exp2() / (2.0 * guesses_per_second))
}

/// Formats a duration in the largest sensible unit among seconds, minutes,
/// hours, days, years and millennia, to two decimal places.
pub fn format_time(seconds: f64) -> String {
    if seconds < MINUTE {
        format!("{seconds:.2} seconds")
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else if seconds < MILLENNIUM {
        format!("{:.2} years", seconds / YEAR)
    } else {
        format!("{:.2} millennia", seconds / MILLENNIUM)
    }
}

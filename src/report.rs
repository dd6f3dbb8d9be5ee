//! Full password analysis - runs the analysis passes in sequence.

use crate::analysis::{
    ATTACK_PROFILES, CrackTimeError, StrengthCategory, crack_time, password_entropy,
    strength_category,
};

/// The result of analyzing one password: entropy, strength category and
/// crack-time estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub entropy_bits: f64,
    pub category: StrengthCategory,
    /// Seconds to crack per attacker profile, in [`ATTACK_PROFILES`] order.
    pub crack_times: Vec<(&'static str, f64)>,
}

/// Analyzes a password: estimates entropy from its character classes,
/// classifies strength, and computes crack times for the fixed attacker
/// profiles.
///
/// # Errors
///
/// Returns [`CrackTimeError`] if a profile carries an invalid guess rate;
/// the built-in profiles never do.
pub fn analyze_password(password: &str) -> Result<PasswordReport, CrackTimeError> {
    let entropy_bits = password_entropy(password);
    let category = strength_category(entropy_bits);

    let mut crack_times = Vec::with_capacity(ATTACK_PROFILES.len());
    for profile in ATTACK_PROFILES {
        let seconds = crack_time(entropy_bits, profile.guesses_per_second)?;
        crack_times.push((profile.label, seconds));
    }

    #[cfg(feature = "tracing")]
    tracing::info!(entropy_bits, category = %category, "password analyzed");

    Ok(PasswordReport {
        entropy_bits,
        category,
        crack_times,
    })
}

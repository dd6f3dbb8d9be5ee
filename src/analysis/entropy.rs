//! Entropy estimation - bits from length and character-class inspection.

use crate::charset::SYMBOLS;

/// Estimates a password's entropy in bits.
///
/// The effective alphabet is inferred from the character classes actually
/// present in the password, not from the classes requested at generation
/// time: any lowercase letter contributes 26, any uppercase 26, any digit
/// 10, and any character from [`SYMBOLS`] the full symbol class.
/// Entropy is `length * log2(alphabet)`.
///
/// Returns `0.0` when no class matches (empty password, or characters
/// outside every class): an unrecognized alphabet earns no credit.
pub fn password_entropy(password: &str) -> f64 {
    let mut alphabet = 0usize;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        alphabet += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        alphabet += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        alphabet += 10;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        alphabet += SYMBOLS.len();
    }

    if alphabet == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (alphabet as f64).log2()
}

/// Entropy in bits of a password of `length` drawn from a nominal alphabet
/// of `alphabet_size` characters.
///
/// This is the heatmap's model: it rates the alphabet a password would be
/// drawn from, while [`password_entropy`] rates the classes a concrete
/// password actually exercises. The two agree whenever the password uses
/// every class of its alphabet. A zero alphabet yields `0.0`.
pub fn nominal_entropy(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

//! Character set registry
//!
//! The four built-in character classes and the nominal complexity tiers
//! derived from them. The classes are pairwise disjoint.

/// Lowercase letters a-z.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters A-Z.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits 0-9.
pub const DIGITS: &str = "0123456789";

/// Fixed punctuation set used for the symbol class.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// Nominal charset complexity tiers, least to most complex.
///
/// A tier rates the alphabet a password *would* be drawn from, not the
/// classes a concrete password actually contains; the per-password model
/// lives in [`crate::password_entropy`]. The two are deliberately separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetTier {
    Lowercase,
    LowerUpper,
    LettersDigits,
    LettersDigitsSymbols,
}

impl CharsetTier {
    /// All tiers in row order for the entropy heatmap.
    pub const ALL: [CharsetTier; 4] = [
        CharsetTier::Lowercase,
        CharsetTier::LowerUpper,
        CharsetTier::LettersDigits,
        CharsetTier::LettersDigitsSymbols,
    ];

    /// Nominal alphabet size of this tier.
    pub fn alphabet_size(&self) -> usize {
        match self {
            CharsetTier::Lowercase => LOWERCASE.len(),
            CharsetTier::LowerUpper => LOWERCASE.len() + UPPERCASE.len(),
            CharsetTier::LettersDigits => LOWERCASE.len() + UPPERCASE.len() + DIGITS.len(),
            CharsetTier::LettersDigitsSymbols => {
                LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len()
            }
        }
    }

    /// Human-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            CharsetTier::Lowercase => "Lowercase",
            CharsetTier::LowerUpper => "Lower+Upper",
            CharsetTier::LettersDigits => "Letters+Digits",
            CharsetTier::LettersDigitsSymbols => "Letters+Digits+Symbols",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 27);
    }

    #[test]
    fn test_classes_pairwise_disjoint() {
        let classes = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert!(
                    a.chars().all(|c| !b.contains(c)),
                    "classes {:?} and {:?} overlap",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_classes_have_distinct_chars() {
        for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
            let unique: std::collections::HashSet<char> = class.chars().collect();
            assert_eq!(unique.len(), class.len());
        }
    }

    #[test]
    fn test_tier_sizes_increase() {
        let sizes: Vec<usize> = CharsetTier::ALL.iter().map(|t| t.alphabet_size()).collect();
        assert_eq!(sizes[0], 26);
        assert_eq!(sizes[1], 52);
        assert_eq!(sizes[2], 62);
        assert_eq!(sizes[3], 62 + SYMBOLS.len());
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(CharsetTier::Lowercase.label(), "Lowercase");
        assert_eq!(
            CharsetTier::LettersDigitsSymbols.label(),
            "Letters+Digits+Symbols"
        );
    }
}

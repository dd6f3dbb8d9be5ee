//! Strength classification - fixed entropy thresholds.

use std::fmt;

/// Entropy thresholds between adjacent categories, in bits. Also the
/// segment boundaries of the strength gauge.
pub const STRENGTH_THRESHOLDS: [f64; 4] = [28.0, 36.0, 60.0, 128.0];

/// Ordered strength categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl StrengthCategory {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StrengthCategory::VeryWeak => "Very Weak",
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Reasonable => "Reasonable",
            StrengthCategory::Strong => "Strong",
            StrengthCategory::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps an entropy value to its strength category.
///
/// Each threshold belongs to the higher category: exactly 28 bits is
/// already `Weak`, exactly 128 bits already `Very Strong`.
pub fn strength_category(entropy: f64) -> StrengthCategory {
    if entropy < STRENGTH_THRESHOLDS[0] {
        StrengthCategory::VeryWeak
    } else if entropy < STRENGTH_THRESHOLDS[1] {
        StrengthCategory::Weak
    } else if entropy < STRENGTH_THRESHOLDS[2] {
        StrengthCategory::Reasonable
    } else if entropy < STRENGTH_THRESHOLDS[3] {
        StrengthCategory::Strong
    } else {
        StrengthCategory::VeryStrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_higher_category() {
        assert_eq!(strength_category(28.0), StrengthCategory::Weak);
        assert_eq!(strength_category(36.0), StrengthCategory::Reasonable);
        assert_eq!(strength_category(60.0), StrengthCategory::Strong);
        assert_eq!(strength_category(128.0), StrengthCategory::VeryStrong);
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(strength_category(27.99), StrengthCategory::VeryWeak);
        assert_eq!(strength_category(35.99), StrengthCategory::Weak);
        assert_eq!(strength_category(59.99), StrengthCategory::Reasonable);
        assert_eq!(strength_category(127.99), StrengthCategory::Strong);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(strength_category(0.0), StrengthCategory::VeryWeak);
        assert_eq!(strength_category(1000.0), StrengthCategory::VeryStrong);
    }

    #[test]
    fn test_categories_are_ordered() {
        assert!(StrengthCategory::VeryWeak < StrengthCategory::Weak);
        assert!(StrengthCategory::Weak < StrengthCategory::Reasonable);
        assert!(StrengthCategory::Reasonable < StrengthCategory::Strong);
        assert!(StrengthCategory::Strong < StrengthCategory::VeryStrong);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StrengthCategory::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthCategory::Reasonable.to_string(), "Reasonable");
        assert_eq!(StrengthCategory::VeryStrong.to_string(), "Very Strong");
    }
}

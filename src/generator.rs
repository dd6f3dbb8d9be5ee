//! Password generation.

use rand::Rng;
use thiserror::Error;

use crate::charset::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("no characters selected for password generation")]
    EmptyCharset,
}

/// Options for [`generate_password`].
///
/// Lowercase letters are always included; the three flags add the optional
/// classes. Defaults to a 12-character password with every class enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 12,
            use_upper: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl GeneratorOptions {
    /// Builds the active charset: lowercase first, then each selected
    /// optional class in the fixed order uppercase, digits, symbols.
    fn charset(&self) -> Vec<char> {
        let mut chars: Vec<char> = LOWERCASE.chars().collect();
        if self.use_upper {
            chars.extend(UPPERCASE.chars());
        }
        if self.use_digits {
            chars.extend(DIGITS.chars());
        }
        if self.use_symbols {
            chars.extend(SYMBOLS.chars());
        }
        chars
    }
}

/// Generates a password using the process-wide thread RNG.
///
/// # Errors
///
/// Returns [`GeneratorError::EmptyCharset`] if the active charset is empty.
/// Lowercase is always included, so the check is defensive only.
pub fn generate_password(options: &GeneratorOptions) -> Result<String, GeneratorError> {
    generate_password_with(&mut rand::thread_rng(), options)
}

/// Generates a password from the given RNG.
///
/// Each character is drawn independently and uniformly, with replacement,
/// from the active charset. Pass a seeded RNG for reproducible output.
///
/// # Example
///
/// ```rust
/// use pwd_entropy::{generate_password_with, GeneratorOptions};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let options = GeneratorOptions::default();
/// let a = generate_password_with(&mut rng, &options).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let b = generate_password_with(&mut rng, &options).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_password_with<R: Rng>(
    rng: &mut R,
    options: &GeneratorOptions,
) -> Result<String, GeneratorError> {
    let charset = options.charset();
    if charset.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("password generation failed: empty charset");
        return Err(GeneratorError::EmptyCharset);
    }

    let password: String = (0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(length = options.length, "password generated");

    Ok(password)
}

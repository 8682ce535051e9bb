use rand::{rngs::OsRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use crate::error::{Error, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

/// Which character classes to draw from, and how many characters to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// The characters eligible for selection, in the order upper, lower, digits, symbols.
    pub fn alphabet(&self) -> Vec<char> {
        let mut charset = String::new();
        if self.use_upper {
            charset.push_str(UPPERCASE);
        }
        if self.use_lower {
            charset.push_str(LOWERCASE);
        }
        if self.use_digits {
            charset.push_str(DIGITS);
        }
        if self.use_symbols {
            charset.push_str(SYMBOLS);
        }
        charset.chars().collect()
    }

    /// Checks the length range and that at least one class is enabled.
    pub fn validate(&self) -> Result<()> {
        if !(self.use_upper || self.use_lower || self.use_digits || self.use_symbols) {
            return Err(Error::NoCharacterClass);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(Error::InvalidLength(self.length));
        }
        Ok(())
    }
}

/// A generated password. The backing memory is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Password(s.to_owned())
    }
}

/// Generates a password from the operating system's random source.
pub fn generate(config: &GeneratorConfig) -> Result<Password> {
    generate_with_rng(config, &mut OsRng)
}

/// Generates a password drawing indices from `rng`. Callers outside of tests and benchmarks
/// should use `generate`, which always uses a cryptographically secure source.
pub fn generate_with_rng<R: Rng + rand::CryptoRng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Password> {
    config.validate()?;
    let alphabet = config.alphabet();

    let password: String = (0..config.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    Ok(Password(password))
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator_tests;

//! Shortcode generation and validation.

use crate::error::AppError;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::{LazyLock, Mutex};

/// Length of generated shortcodes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Accepted shape for caller-supplied shortcodes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,10}$").unwrap());

/// Validates a user-provided custom shortcode.
///
/// # Rules
///
/// - Length: 3-10 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcodeFormat`] otherwise.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::invalid_shortcode_format(code));
    }
    Ok(())
}

/// Random shortcode source.
///
/// Wraps a seedable PRNG so production wiring draws from OS entropy while
/// tests can fix the seed and assert the exact sequence of codes. Collision
/// probability is negligible in a 62^6 space, but the caller still retries
/// against the store and caps the attempts.
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Generator with a fixed seed, for deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draws a 6-character code uniformly from the alphanumeric alphabet.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().expect("code generator rng lock poisoned");
        (0..GENERATED_CODE_LENGTH)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

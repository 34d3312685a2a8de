#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Pronounceable and random password generation.
//!
//! Two generators share the operating system CSPRNG:
//!
//! * [generate_phoneme_password] assembles passwords from a table
//!   of English syllable fragments so the result is easier to
//!   remember while staying unpredictable.
//! * [generate_flat_password] samples uniformly from a pool of
//!   character classes.
//!
//! Most callers should reach for [generator::PasswordBuilder] which
//! picks a generator, wraps the result in a secret and measures
//! its strength.

pub mod charset;
mod error;
mod flat;
pub mod generator;
mod options;
pub mod phoneme;
mod phonetic;
mod random;

pub use error::Error;
pub use flat::{generate_flat_password, generate_flat_password_with_rng};
pub use options::PasswordOptions;
pub use phonetic::{
    generate_phoneme_password, generate_phoneme_password_with_rng,
};
pub use random::Limits;

pub use zxcvbn;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Shortest password that can be generated.
pub const MIN_LENGTH: usize = 1;

/// Longest password that can be generated.
pub const MAX_LENGTH: usize = 64;

/// Length used when none is given.
pub const DEFAULT_LENGTH: usize = 12;

/// Below this length phonetic construction is unreliable and
/// the flat generator is used instead.
pub const MIN_PHONETIC_LENGTH: usize = 5;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}

/// Ensure a length is within the supported range.
pub(crate) fn check_length(length: usize) -> Result<()> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Error::InvalidLength(length));
    }
    Ok(())
}

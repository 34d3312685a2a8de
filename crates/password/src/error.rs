use crate::PasswordOptions;
use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a password length is outside
    /// of the supported range.
    #[error("password length {0} is out of range, must be between {min} and {max}", min = crate::MIN_LENGTH, max = crate::MAX_LENGTH)]
    InvalidLength(usize),

    /// Error generated when the retry ceiling is reached before
    /// a password satisfying every requested option was built.
    #[error("unable to satisfy options {options:?} for a password of length {length}")]
    InfeasibleConstraints {
        /// Requested length.
        length: usize,
        /// Requested options.
        options: PasswordOptions,
    },
}

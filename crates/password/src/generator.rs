//! Utility for generating passwords.
use crate::{
    csprng, generate_flat_password_with_rng,
    generate_phoneme_password_with_rng, Limits, PasswordOptions, Result,
    MAX_LENGTH, MIN_LENGTH, MIN_PHONETIC_LENGTH,
};
use secrecy::SecretString;
use std::fmt;
use zxcvbn::{zxcvbn, Entropy};

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Clamp a requested length into the supported range.
pub fn clamp_length(length: i64) -> usize {
    length.clamp(MIN_LENGTH as i64, MAX_LENGTH as i64) as usize
}

/// Generator used to build a password.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    /// Pronounceable passwords unless the length is too short.
    #[default]
    Auto,
    /// Pronounceable passwords.
    Phoneme,
    /// Uniformly random characters.
    Flat,
}

impl Mode {
    /// Resolve automatic selection for a password length.
    pub fn resolve(self, length: usize) -> Self {
        match self {
            Self::Auto if length < MIN_PHONETIC_LENGTH => Self::Flat,
            Self::Auto => Self::Phoneme,
            mode => mode,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Auto => "auto",
                Self::Phoneme => "phoneme",
                Self::Flat => "flat",
            }
        )
    }
}

/// Generated password result.
#[derive(Debug)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// The computed entropy for the password.
    pub entropy: Entropy,
    /// Generator that built the password.
    pub mode: Mode,
}

/// Options for password generation.
#[derive(Debug, Clone)]
pub struct PasswordBuilder {
    length: usize,
    options: PasswordOptions,
    mode: Mode,
    limits: Limits,
}

impl PasswordBuilder {
    /// Create a new password builder.
    ///
    /// Digits and uppercase letters are included and the
    /// generator is chosen from the length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            options: Default::default(),
            mode: Default::default(),
            limits: Default::default(),
        }
    }

    /// Create a builder for pronounceable passwords.
    pub fn new_phoneme(length: usize) -> Self {
        Self::new(length).mode(Mode::Phoneme)
    }

    /// Create a builder for uniformly random passwords.
    pub fn new_flat(length: usize) -> Self {
        Self::new(length).mode(Mode::Flat)
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Options used for generation.
    pub fn flags(&self) -> PasswordOptions {
        self.options
    }

    /// Replace all the options.
    pub fn with_options(mut self, options: PasswordOptions) -> Self {
        self.options = options;
        self
    }

    /// Require a digit.
    pub fn digits(mut self, enabled: bool) -> Self {
        self.options.set(PasswordOptions::DIGITS, enabled);
        self
    }

    /// Require an uppercase letter.
    pub fn uppers(mut self, enabled: bool) -> Self {
        self.options.set(PasswordOptions::UPPERS, enabled);
        self
    }

    /// Require a symbol.
    pub fn symbols(mut self, enabled: bool) -> Self {
        self.options.set(PasswordOptions::SYMBOLS, enabled);
        self
    }

    /// Avoid ambiguous characters.
    pub fn avoid_ambiguous(mut self, enabled: bool) -> Self {
        self.options.set(PasswordOptions::AMBIGUOUS, enabled);
        self
    }

    /// Set the generator mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the retry limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Generate a password.
    pub fn one(&self) -> Result<PasswordResult> {
        let rng = &mut csprng();
        let mode = self.mode.resolve(self.length);
        let password = match mode {
            Mode::Flat => generate_flat_password_with_rng(
                rng,
                self.length,
                self.options,
                self.limits,
            )?,
            _ => generate_phoneme_password_with_rng(
                rng,
                self.length,
                self.options,
                self.limits,
            )?,
        };
        let entropy = measure_entropy(&password, &[]);
        Ok(PasswordResult {
            password: SecretString::new(password.into_boxed_str()),
            entropy,
            mode,
        })
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one()?);
        }
        Ok(results)
    }
}

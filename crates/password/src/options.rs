use bitflags::bitflags;

bitflags! {
    /// Character classes and filters requested for a password.
    ///
    /// Every flag is independent; any combination is valid
    /// including none at all.
    #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct PasswordOptions: u8 {
        /// Include at least one digit.
        const DIGITS            =        0b00000001;
        /// Include at least one uppercase letter.
        const UPPERS            =        0b00000010;
        /// Include at least one symbol.
        const SYMBOLS           =        0b00000100;
        /// Avoid characters that are easily confused
        /// with one another.
        const AMBIGUOUS         =        0b00001000;
    }
}

impl PasswordOptions {
    /// Options that must appear at least once in a generated password.
    ///
    /// `AMBIGUOUS` is a filter rather than a character class
    /// so it is never required.
    pub fn required(self) -> Self {
        self.difference(Self::AMBIGUOUS)
    }

    /// Number of character classes that must appear.
    pub fn required_count(self) -> usize {
        self.required().bits().count_ones() as usize
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self::DIGITS | Self::UPPERS
    }
}

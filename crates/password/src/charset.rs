//! Character pools shared by the generators.

/// Lowercase roman letters.
pub const LOWERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n',
    'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Uppercase roman letters.
pub const UPPERS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Numerical digits.
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Printable ASCII punctuation.
pub const SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.',
    '/', ':', ';', '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`',
    '{', '|', '}', '~',
];

/// Characters that are easily mistaken for one another.
pub const AMBIGUOUS: &[char] = &[
    'B', '8', 'G', '6', 'I', '1', 'l', '0', 'O', 'Q', 'D', 'S', '5', 'Z',
    '2',
];

/// Determine if a character is ambiguous.
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}

/// Determine if any character in some text is ambiguous.
pub fn contains_ambiguous(text: &str) -> bool {
    text.chars().any(is_ambiguous)
}

/// Class of a password character.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Class {
    /// Lowercase letter.
    Lower,
    /// Uppercase letter.
    Upper,
    /// Numerical digit.
    Digit,
    /// Punctuation symbol.
    Symbol,
}

impl Class {
    /// Classify a character.
    ///
    /// Returns `None` for characters outside of every pool.
    pub fn of(c: char) -> Option<Self> {
        if LOWERS.contains(&c) {
            Some(Self::Lower)
        } else if UPPERS.contains(&c) {
            Some(Self::Upper)
        } else if DIGITS.contains(&c) {
            Some(Self::Digit)
        } else if SYMBOLS.contains(&c) {
            Some(Self::Symbol)
        } else {
            None
        }
    }

    /// Pool of characters for this class.
    pub fn pool(&self) -> &'static [char] {
        match self {
            Self::Lower => LOWERS,
            Self::Upper => UPPERS,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    /// Determine if some text has a character of this class.
    pub fn appears_in(&self, text: &str) -> bool {
        text.chars().any(|c| Self::of(c) == Some(*self))
    }
}

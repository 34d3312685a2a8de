//! Pronounceable password generator.
//!
//! Fragments are drawn from the [phoneme table](crate::phoneme)
//! alternating between consonant and vowel sounds. Candidates that
//! break a rule are discarded and drawn again; when a requested
//! character class never made it into a finished password the
//! whole attempt is thrown away.
use crate::{
    charset::{contains_ambiguous, DIGITS, SYMBOLS},
    check_length, csprng,
    phoneme::{Element, Phonetic, ELEMENTS},
    random::{chance, pick, pick_char, Limits},
    Error, PasswordOptions, Result,
};
use rand::{CryptoRng, Rng};
use std::borrow::Cow;

const UPPER_ODDS: usize = 2;
const DIGIT_ODDS: usize = 3;
const SYMBOL_ODDS: usize = 2;
const CONSONANT_ODDS: usize = 7;

/// Generate a pronounceable password using the default
/// CSPRNG and limits.
pub fn generate_phoneme_password(
    length: usize,
    options: PasswordOptions,
) -> Result<String> {
    generate_phoneme_password_with_rng(
        &mut csprng(),
        length,
        options,
        Limits::default(),
    )
}

/// Generate a pronounceable password.
///
/// Returns [Error::InfeasibleConstraints] when no attempt within
/// the limits satisfied every required option, which is expected
/// for very short lengths.
pub fn generate_phoneme_password_with_rng<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    options: PasswordOptions,
    limits: Limits,
) -> Result<String> {
    check_length(length)?;
    for attempt in 0..limits.attempts {
        if let Some(password) =
            Attempt::new(rng, length, options).run(rng, limits.draws)
        {
            tracing::debug!(
                length = %length,
                attempt = %attempt,
                "phoneme_password::generated"
            );
            return Ok(password);
        }
    }
    tracing::debug!(
        length = %length,
        options = ?options,
        attempts = %limits.attempts,
        "phoneme_password::infeasible"
    );
    Err(Error::InfeasibleConstraints { length, options })
}

fn random_expected<R: Rng>(rng: &mut R) -> Phonetic {
    *pick(rng, &[Phonetic::CONSONANT, Phonetic::VOWEL])
}

/// Uppercase the first letter of a fragment.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// State for a single generation attempt.
struct Attempt {
    length: usize,
    options: PasswordOptions,
    output: String,
    previous: Option<Phonetic>,
    expected: Phonetic,
    unmet: PasswordOptions,
}

impl Attempt {
    fn new<R: Rng>(
        rng: &mut R,
        length: usize,
        options: PasswordOptions,
    ) -> Self {
        Self {
            length,
            options,
            output: String::with_capacity(length),
            previous: None,
            expected: random_expected(rng),
            unmet: options.required(),
        }
    }

    fn avoid_ambiguous(&self) -> bool {
        self.options.contains(PasswordOptions::AMBIGUOUS)
    }

    fn previous_is_vowel(&self) -> bool {
        self.previous
            .is_some_and(|p| p.contains(Phonetic::VOWEL))
    }

    /// Fill the password to length.
    ///
    /// Yields `None` when the draw ceiling is reached or a
    /// required option never appeared.
    fn run<R: Rng>(mut self, rng: &mut R, draws: usize) -> Option<String> {
        let mut remaining = draws;
        while self.output.len() < self.length {
            if remaining == 0 {
                tracing::trace!("phoneme_password::draws_exhausted");
                return None;
            }
            remaining -= 1;

            let element = pick(rng, ELEMENTS);
            let Some(text) = self.accept(rng, element) else {
                continue;
            };
            self.output.push_str(&text);
            if self.output.len() == self.length {
                break;
            }

            if self.options.contains(PasswordOptions::DIGITS)
                && chance(rng, DIGIT_ODDS)
            {
                self.push_digit(rng);
                continue;
            }

            if self.options.contains(PasswordOptions::SYMBOLS)
                && chance(rng, SYMBOL_ODDS)
            {
                let avoid_ambiguous = self.avoid_ambiguous();
                self.output.push(pick_char(rng, SYMBOLS, avoid_ambiguous));
                self.unmet.remove(PasswordOptions::SYMBOLS);
            }

            self.expected = self.next_expected(rng, element);
            self.previous = Some(element.phonetic);
        }

        if self.unmet.is_empty() {
            Some(self.output)
        } else {
            tracing::trace!(
                unmet = ?self.unmet,
                "phoneme_password::unmet"
            );
            None
        }
    }

    /// Append a digit and start the phonetic sequence afresh.
    fn push_digit<R: Rng>(&mut self, rng: &mut R) {
        let avoid_ambiguous = self.avoid_ambiguous();
        self.output.push(pick_char(rng, DIGITS, avoid_ambiguous));
        self.previous = None;
        self.expected = random_expected(rng);
        self.unmet.remove(PasswordOptions::DIGITS);
    }

    /// Text to append for a candidate or `None` to draw again.
    fn accept<R: Rng>(
        &mut self,
        rng: &mut R,
        element: &'static Element,
    ) -> Option<Cow<'static, str>> {
        if element.is(Phonetic::NOT_FIRST) && self.output.is_empty() {
            return None;
        }
        if !element.is(self.expected) {
            return None;
        }
        // no vowel diphthong straight after a vowel
        if self.previous_is_vowel()
            && element
                .phonetic
                .contains(Phonetic::VOWEL | Phonetic::DIPHTHONG)
        {
            return None;
        }
        if self.output.len() + element.len() > self.length {
            return None;
        }
        if self.avoid_ambiguous() && contains_ambiguous(element.text) {
            return None;
        }

        if self.options.contains(PasswordOptions::UPPERS)
            && (self.output.is_empty() || element.is(Phonetic::CONSONANT))
            && chance(rng, UPPER_ODDS)
        {
            let text = capitalize(element.text);
            if self.avoid_ambiguous() && contains_ambiguous(&text) {
                return None;
            }
            self.unmet.remove(PasswordOptions::UPPERS);
            return Some(Cow::Owned(text));
        }

        Some(Cow::Borrowed(element.text))
    }

    fn next_expected<R: Rng>(
        &self,
        rng: &mut R,
        element: &Element,
    ) -> Phonetic {
        if self.expected.contains(Phonetic::CONSONANT) {
            Phonetic::VOWEL
        } else if self.previous_is_vowel()
            || element.is(Phonetic::DIPHTHONG)
            || chance(rng, CONSONANT_ODDS)
        {
            Phonetic::CONSONANT
        } else {
            Phonetic::VOWEL
        }
    }
}

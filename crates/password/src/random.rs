use crate::charset::is_ambiguous;
use rand::Rng;

/// Granularity of probability draws.
///
/// Odds are expressed as `k` in `ODDS`; a draw succeeds when a
/// uniform integer in `[0, ODDS)` is below `k`.
pub(crate) const ODDS: usize = 10;

/// Draw with odds of `k` in [ODDS].
pub(crate) fn chance<R: Rng>(rng: &mut R, k: usize) -> bool {
    rng.gen_range(0..ODDS) < k
}

/// Choose an item uniformly.
///
/// Callers only pass the static pools which are never empty.
pub(crate) fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Choose a character uniformly, redrawing ambiguous
/// characters when `avoid_ambiguous` is set.
///
/// Pools must contain at least one unambiguous character.
pub(crate) fn pick_char<R: Rng>(
    rng: &mut R,
    pool: &[char],
    avoid_ambiguous: bool,
) -> char {
    loop {
        let c = *pick(rng, pool);
        if !avoid_ambiguous || !is_ambiguous(c) {
            return c;
        }
    }
}

/// Ceilings applied while generating a password.
///
/// Generation retries from scratch whenever a requested
/// character class never appears; for lengths that are too
/// short to fit every class the retries would otherwise
/// never end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Limits {
    /// Maximum number of complete generation attempts.
    pub attempts: usize,
    /// Maximum number of element draws within one attempt.
    pub draws: usize,
}

impl Limits {
    /// Default maximum number of attempts.
    pub const ATTEMPTS: usize = 10_000;

    /// Default maximum number of draws per attempt.
    pub const DRAWS: usize = 100_000;

    /// Limits with a custom attempt ceiling.
    pub fn attempts(attempts: usize) -> Self {
        Self {
            attempts,
            ..Default::default()
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            attempts: Self::ATTEMPTS,
            draws: Self::DRAWS,
        }
    }
}

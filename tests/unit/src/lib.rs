//! Shared helpers for the unit tests.

/// Number of passwords generated for statistical checks.
pub const TRIALS: usize = 250;

/// Longest run of consecutive vowel letters, ignoring case.
///
/// Two vowel diphthongs back to back would produce a run of four.
pub fn max_vowel_run(password: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in password.chars() {
        if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Determine if a password starts with a fragment that
/// may not begin a password.
pub fn starts_with_not_first(password: &str) -> bool {
    let lower = password.to_ascii_lowercase();
    lower.starts_with("gh") || lower.starts_with("ng")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vowel_run() {
        assert_eq!(0, max_vowel_run("xyz"));
        assert_eq!(3, max_vowel_run("quae7b"));
        assert_eq!(4, max_vowel_run("bAeai"));
    }
}

//! Uniformly random password generator.
use crate::{
    charset::{is_ambiguous, Class},
    check_length, csprng,
    random::{pick, Limits},
    Error, PasswordOptions, Result,
};
use rand::{CryptoRng, Rng};

/// Classes added to the pool for each option.
const OPTION_CLASSES: [(PasswordOptions, Class); 3] = [
    (PasswordOptions::DIGITS, Class::Digit),
    (PasswordOptions::UPPERS, Class::Upper),
    (PasswordOptions::SYMBOLS, Class::Symbol),
];

/// Generate a random password using the default CSPRNG and limits.
pub fn generate_flat_password(
    length: usize,
    options: PasswordOptions,
) -> Result<String> {
    generate_flat_password_with_rng(
        &mut csprng(),
        length,
        options,
        Limits::default(),
    )
}

/// Generate a random password.
///
/// Characters are drawn with replacement from lowercase letters plus
/// the classes named by `options`. Each requested class is only
/// guaranteed to appear when `length` is greater than the number of
/// requested classes.
pub fn generate_flat_password_with_rng<R: Rng + CryptoRng>(
    rng: &mut R,
    length: usize,
    options: PasswordOptions,
    limits: Limits,
) -> Result<String> {
    check_length(length)?;

    let required: Vec<Class> = OPTION_CLASSES
        .iter()
        .filter(|(option, _)| options.contains(*option))
        .map(|(_, class)| *class)
        .collect();
    let pool = build_pool(
        &required,
        options.contains(PasswordOptions::AMBIGUOUS),
    );
    let enforce = length > options.required_count();

    for attempt in 0..limits.attempts {
        let password: String =
            (0..length).map(|_| *pick(rng, pool.as_slice())).collect();
        if !enforce || required.iter().all(|c| c.appears_in(&password)) {
            tracing::debug!(
                length = %length,
                attempt = %attempt,
                pool = %pool.len(),
                "flat_password::generated"
            );
            return Ok(password);
        }
    }

    tracing::debug!(
        length = %length,
        options = ?options,
        attempts = %limits.attempts,
        "flat_password::infeasible"
    );
    Err(Error::InfeasibleConstraints { length, options })
}

/// Character pool for the given classes, lowercase letters first.
fn build_pool(classes: &[Class], avoid_ambiguous: bool) -> Vec<char> {
    std::iter::once(Class::Lower)
        .chain(classes.iter().copied())
        .flat_map(|class| class.pool().iter().copied())
        .filter(|c| !avoid_ambiguous || !is_ambiguous(*c))
        .collect()
}

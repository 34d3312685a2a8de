use anyhow::Result;
use pwgen_password::{
    charset::{is_ambiguous, Class, LOWERS},
    generate_flat_password, PasswordOptions, MAX_LENGTH, MIN_LENGTH,
};
use pwgen_unit_tests::TRIALS;

#[test]
fn flat_password_length() -> Result<()> {
    for length in MIN_LENGTH..=MAX_LENGTH {
        let password =
            generate_flat_password(length, PasswordOptions::all())?;
        assert_eq!(length, password.len());
    }
    Ok(())
}

#[test]
fn flat_password_lowercase_only() -> Result<()> {
    for _ in 0..TRIALS {
        let password = generate_flat_password(12, PasswordOptions::empty())?;
        assert_eq!(12, password.len());
        assert!(password.chars().all(|c| LOWERS.contains(&c)));
    }
    Ok(())
}

#[test]
fn flat_password_avoid_ambiguous() -> Result<()> {
    for _ in 0..TRIALS {
        let password = generate_flat_password(32, PasswordOptions::all())?;
        assert!(!password.chars().any(is_ambiguous), "{}", password);
    }
    Ok(())
}

#[test]
fn flat_password_must_include() -> Result<()> {
    let options = PasswordOptions::DIGITS
        | PasswordOptions::UPPERS
        | PasswordOptions::SYMBOLS;
    for length in 4..=MAX_LENGTH {
        let password = generate_flat_password(length, options)?;
        assert!(Class::Upper.appears_in(&password), "{}", password);
        assert!(Class::Digit.appears_in(&password), "{}", password);
        assert!(Class::Symbol.appears_in(&password), "{}", password);
    }
    let cases = [
        (PasswordOptions::DIGITS, Class::Digit),
        (PasswordOptions::UPPERS, Class::Upper),
        (PasswordOptions::SYMBOLS, Class::Symbol),
    ];
    for (option, class) in cases {
        for _ in 0..TRIALS {
            let password = generate_flat_password(2, option)?;
            assert_eq!(2, password.len());
            assert!(class.appears_in(&password), "{}", password);
        }
    }
    Ok(())
}

#[test]
fn flat_password_single_character() -> Result<()> {
    let options = PasswordOptions::DIGITS
        | PasswordOptions::UPPERS
        | PasswordOptions::SYMBOLS;
    let password = generate_flat_password(1, options)?;
    assert_eq!(1, password.len());
    Ok(())
}

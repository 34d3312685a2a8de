use anyhow::Result;
use pwgen_password::{
    charset::Class,
    generator::{Mode, PasswordBuilder},
    Error, Limits, PasswordOptions,
};
use secrecy::ExposeSecret;
use std::thread;

#[test]
fn passgen_phoneme() -> Result<()> {
    let generator = PasswordBuilder::new_phoneme(12);
    let result = generator.one()?;
    assert_eq!(Mode::Phoneme, result.mode);
    assert_eq!(generator.len(), result.password.expose_secret().len());
    Ok(())
}

#[test]
fn passgen_flat() -> Result<()> {
    let generator = PasswordBuilder::new_flat(12);
    let result = generator.one()?;
    assert_eq!(Mode::Flat, result.mode);
    assert_eq!(generator.len(), result.password.expose_secret().len());
    Ok(())
}

#[test]
fn passgen_short_uses_flat() -> Result<()> {
    for length in 1..5 {
        let generator = PasswordBuilder::new(length);
        let result = generator.one()?;
        assert_eq!(Mode::Flat, result.mode);
        assert_eq!(length, result.password.expose_secret().len());
    }
    Ok(())
}

#[test]
fn passgen_no_options() -> Result<()> {
    let generator =
        PasswordBuilder::new(8).with_options(PasswordOptions::empty());
    let result = generator.one()?;
    let password = result.password.expose_secret();
    assert_eq!(8, password.len());
    assert!(password.chars().all(|c| Class::of(c) == Some(Class::Lower)));
    Ok(())
}

#[test]
fn passgen_entropy() -> Result<()> {
    let weak = PasswordBuilder::new_flat(4)
        .with_options(PasswordOptions::empty())
        .one()?;
    let strong = PasswordBuilder::new_flat(32).symbols(true).one()?;
    assert!(strong.entropy.guesses_log10() > weak.entropy.guesses_log10());
    Ok(())
}

#[test]
fn passgen_limits() {
    let generator = PasswordBuilder::new_phoneme(1)
        .digits(true)
        .uppers(false)
        .limits(Limits::attempts(4));
    assert!(matches!(
        generator.one(),
        Err(Error::InfeasibleConstraints { length: 1, .. })
    ));
}

#[test]
fn passgen_generate() -> Result<()> {
    let generator = PasswordBuilder::new(16).symbols(true);
    let count = 5;
    let passwords = generator.many(count)?;
    assert_eq!(count, passwords.len());
    for result in passwords {
        assert_eq!(generator.len(), result.password.expose_secret().len());
    }
    Ok(())
}

#[test]
fn passgen_concurrent() -> Result<()> {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                PasswordBuilder::new(20)
                    .symbols(true)
                    .avoid_ambiguous(true)
                    .many(25)
                    .map(|results| {
                        results
                            .iter()
                            .all(|r| r.password.expose_secret().len() == 20)
                    })
            })
        })
        .collect();

    for handle in handles {
        let all_valid = handle.join().expect("thread panicked")?;
        assert!(all_valid);
    }
    Ok(())
}

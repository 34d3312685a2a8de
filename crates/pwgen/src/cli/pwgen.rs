use clap::{CommandFactory, Parser};
use pwgen_cli_helpers::{messages::info, CommandTree};
use pwgen_password::{
    generator::{clamp_length, Mode, PasswordBuilder, PasswordResult},
    DEFAULT_LENGTH,
};
use secrecy::ExposeSecret;
use std::io::Write;

use crate::{Result, TARGET};

const DEFAULT_SIZE: i64 = DEFAULT_LENGTH as i64;

/// Generate easier to remember passwords.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Pwgen {
    /// Size of the password (1-64).
    ///
    /// Values outside of the range are clamped.
    #[clap(env = "PWGEN_LENGTH", default_value_t = DEFAULT_SIZE)]
    size: i64,

    /// Exclude uppercase letters.
    #[clap(short = 'A', long)]
    no_capitalize: bool,

    /// Exclude numerals.
    #[clap(short = '0', long)]
    no_numerals: bool,

    /// Include at least one symbol.
    #[clap(short = 'y', long)]
    symbols: bool,

    /// Avoid ambiguous characters.
    #[clap(short = 'b', long)]
    ambiguous: bool,

    /// Generate a completely random password.
    #[clap(short = 's', long)]
    secure: bool,

    /// Number of passwords to generate.
    #[clap(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print the estimated strength of each password to stderr.
    #[clap(long)]
    strength: bool,
}

impl Pwgen {
    /// Password builder for these arguments.
    pub fn builder(&self) -> PasswordBuilder {
        let mode = if self.secure { Mode::Flat } else { Mode::Auto };
        PasswordBuilder::new(clamp_length(self.size))
            .uppers(!self.no_capitalize)
            .digits(!self.no_numerals)
            .symbols(self.symbols)
            .avoid_ambiguous(self.ambiguous)
            .mode(mode)
    }
}

/// Summary of the estimated strength of a password.
fn strength_line(result: &PasswordResult) -> String {
    format!(
        "{} score {}/4, 10^{:.1} guesses",
        result.mode,
        result.entropy.score() as u8,
        result.entropy.guesses_log10(),
    )
}

pub fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PWGEN_CLI_JSON").ok().is_some() {
        let cmd = Pwgen::command();
        let tree: CommandTree = (&cmd).into();
        serde_json::to_writer_pretty(std::io::stdout(), &tree)?;
        return Ok(());
    }

    let args = Pwgen::parse();
    let builder = args.builder();
    tracing::debug!(
        target: TARGET,
        requested = %args.size,
        length = %builder.len(),
        options = ?builder.flags(),
        count = %args.count,
        "generate"
    );

    let mut stdout = std::io::stdout().lock();
    for result in builder.many(args.count)? {
        writeln!(stdout, "{}", result.password.expose_secret())?;
        if args.strength {
            info(strength_line(&result));
        }
    }
    Ok(())
}

//! Terminal messages.
use colored::Colorize;

const ERROR: &str = "Error:";

/// Print an informational message to stderr.
///
/// Keeps stdout free for command output.
pub fn info(msg: impl AsRef<str>) {
    eprintln!("{}", msg.as_ref().dimmed());
}

/// Print an error message for failure to stderr.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    eprintln!("{}", out);
}

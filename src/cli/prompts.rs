//! Centralized user-facing messages for CLI output.

use std::io::{self, Write};

use zeroize::Zeroizing;

use super::usage::usage;
use crate::error::Error;
use crate::pass::Password;
use crate::terminal::red;

/// Print an error message to stderr (red on a terminal), with usage for
/// argument errors.
pub fn error(err: &Error) {
    eprintln!("{}", red(&format!("Error: {err}")));
    if err.wants_usage() {
        eprintln!();
        eprint!("{}", usage());
    }
}

pub fn help() {
    print!("{}", usage());
}

pub fn version() {
    println!("passgen {}", env!("CARGO_PKG_VERSION"));
}

/// Write the password line in a single call so output is never partial.
pub fn password(pass: &Password, quiet: bool) -> io::Result<()> {
    let prefix = if quiet { "" } else { "Generated password: " };
    let mut line = Zeroizing::new(String::with_capacity(prefix.len() + pass.len() + 1));
    line.push_str(prefix);
    line.push_str(pass.as_str());
    line.push('\n');

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(line.as_bytes())?;
    out.flush()
}

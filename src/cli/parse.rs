use super::CliFlags;
use crate::error::{ArgumentError, Result};
use crate::pass::CharacterClass;
use crate::settings::MAX_LEN;

fn is_help(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

/// Interpret `args` (program name first).
///
/// `--help` anywhere wins over every other token, valid or not.
pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();

    if args.iter().skip(1).any(|a| is_help(a)) {
        flags.help = true;
        return Ok(flags);
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "--upper" => flags.classes.insert(CharacterClass::Upper),
            "--lower" => flags.classes.insert(CharacterClass::Lower),
            "--digits" => flags.classes.insert(CharacterClass::Digit),
            "--special" => flags.classes.insert(CharacterClass::Special),
            "-l" | "--length" => {
                i += 1;
                let value = args.get(i).ok_or(ArgumentError::MissingLength)?;
                flags.length = Some(parse_length(value)?);
            }
            arg => return Err(ArgumentError::UnknownOption(arg.to_string()).into()),
        }
        i += 1;
    }

    Ok(flags)
}

/// Whole number in `1..MAX_LEN`. Negative numbers parse so they can be
/// reported as out of range rather than malformed.
fn parse_length(value: &str) -> Result<usize> {
    let n: i64 = value
        .trim()
        .parse()
        .map_err(|_| ArgumentError::InvalidLength(value.to_string()))?;

    if n <= 0 || n >= MAX_LEN as i64 {
        return Err(ArgumentError::LengthOutOfRange(n).into());
    }
    Ok(n as usize)
}

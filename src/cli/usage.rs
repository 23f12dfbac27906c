//! Usage block shown by `--help` and after argument errors.

use crate::settings::{DEFAULT_LENGTH, MAX_LEN};
use crate::terminal::TextBox;

pub fn usage() -> String {
    TextBox::new()
        .top("Passgen")
        .line_center("Random password generator")
        .line("")
        .line("USAGE:")
        .line("  passgen [--length N] [--upper] [--lower] [--digits] [--special]")
        .line("  passgen --help")
        .line("")
        .line("OPTIONS:")
        .line(" Password:")
        .opt(
            "  -l, --length <N>",
            &format!(
                "Password length (default: {DEFAULT_LENGTH}, max: {})",
                MAX_LEN - 1
            ),
        )
        .opt("      --upper", "Include uppercase letters (A-Z)")
        .opt("      --lower", "Include lowercase letters (a-z)")
        .opt("      --digits", "Include digits (0-9)")
        .opt("      --special", "Include special characters (!@#$...)")
        .line("")
        .line(" With no class flags, upper, lower and digits are used.")
        .line("")
        .line(" Output:")
        .opt("  -q, --quiet", "Print only the password")
        .opt("      --verbose", "Debug logging on stderr (never the password)")
        .line("")
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .line("")
        .line("EXAMPLES:")
        .line("  passgen --length 16 --upper --lower --digits --special")
        .line("  passgen --lower --digits     Lowercase and digits, length 12")
        .line("  passgen --length 8 --special 8 special characters only")
        .line("")
        .bottom()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_flag_and_examples() {
        let text = usage();
        for flag in [
            "--length", "--upper", "--lower", "--digits", "--special", "--help",
        ] {
            assert!(text.contains(flag), "missing {flag}");
        }
        assert!(text.contains("max: 127"));
        let examples = text
            .lines()
            .skip_while(|l| !l.contains("EXAMPLES:"))
            .filter(|l| l.contains("passgen --"))
            .count();
        assert!(examples >= 2);
    }
}

// UI layer: the terminal output shown when required options are missing.
// Usage text goes to stdout, the red diagnostics to stderr.

use crate::options::{Args, MissingOption};
use clap::CommandFactory;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Print usage followed by one highlighted line per missing value.
pub fn report_missing(missing: &[MissingOption]) -> io::Result<()> {
    Args::command().print_help()?;
    write_missing(&mut io::stderr().lock(), missing)
}

/// Write the `Missing required flag ...` lines, styled red.
pub fn write_missing<W: Write>(out: &mut W, missing: &[MissingOption]) -> io::Result<()> {
    for option in missing {
        writeln!(out, "  {}", option.to_string().red())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_missing_value() {
        let mut buf = Vec::new();
        write_missing(&mut buf, &[MissingOption::Channel, MissingOption::Token]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Missing required flag --channel or UITS_SLACK_CHANNEL"));
        assert!(text.contains("Missing required flag --token or UITS_SLACK_TOKEN"));
    }

    #[test]
    fn writes_nothing_when_all_present() {
        let mut buf = Vec::new();
        write_missing(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}

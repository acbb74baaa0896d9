//! Console messages for the configurator run.
//!
//! Stdout lines are plain, fixed text. Color only decorates the stderr
//! error prefix.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

pub const BANNER: &str = "Welcome to the ESLint Configurator!";
pub const NO_RULES_SELECTED: &str = "No rules selected.";

pub fn error_prefix(color: bool) -> String {
    if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn saved_message(path: &Path) -> String {
    format!("ESLint configuration saved to {}", path.display())
}

pub fn print_banner<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)
}

pub fn print_no_selection<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", NO_RULES_SELECTED)
}

pub fn print_saved<W: Write + ?Sized>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", saved_message(path))
}

/// Line reported on stderr for a fatal error.
pub fn error_line(err: &dyn std::fmt::Display, color: bool) -> String {
    format!("{} An error occurred: {}", error_prefix(color), err)
}

/// Report a fatal error on stderr.
pub fn print_error(err: &dyn std::fmt::Display, color: bool) {
    eprintln!("{}", error_line(err, color));
}

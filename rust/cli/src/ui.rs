//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and prompts.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Print a prompt without a trailing newline and flush so it shows before input is read
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

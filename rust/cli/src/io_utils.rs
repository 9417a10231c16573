//! File I/O utilities for reading interactive input and text files.
//!
//! This module provides helper functions for I/O used across CLI commands:
//! - Reading one line of interactive input
//! - Reading text files with the UTF-8 BOM stripped
//!
//! ## Error Handling
//!
//! Functions return `Result` types with appropriate error messages. I/O errors
//! are converted to `String` for easy integration with command error handling.

use std::io::{self, BufRead};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input.
///
/// # Returns
///
/// * `Ok(Some(String))` - Trimmed input line (may be empty after trimming)
/// * `Ok(None)` - EOF
/// * `Err(e)` - Read error. A line that is not valid UTF-8 is consumed and reported as
///   [`std::io::ErrorKind::InvalidData`], so the caller can report it and keep reading.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use slidepuzzle_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  1 2  \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("1 2".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if stdin.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8(buf)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8"))?;
    Ok(Some(line.trim().to_string()))
}

/// Read a text file, stripping a leading UTF-8 BOM if present.
///
/// # Arguments
///
/// * `path` - File path to read
///
/// # Returns
///
/// * `Ok(String)` - File contents as UTF-8 string
/// * `Err(String)` - I/O or UTF-8 conversion error, prefixed with the path
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
///
/// UTF-8 BOM is the character U+FEFF at the start of a file. Some text editors
/// add this marker, but it can cause issues when parsing JSON or other formats.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

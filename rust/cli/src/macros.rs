//! Macros for common CLI error handling patterns.
//!
//! This module provides macros to reduce boilerplate in error handling,
//! making the code more maintainable and consistent across the CLI.

/// Write to a stream and exit with error code if writing fails.
///
/// This macro handles the common pattern of attempting to write to stderr/stdout
/// and returning an error exit code if the write operation fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or record a batch error and continue to the next iteration.
///
/// # Examples
///
/// ```ignore
/// let record: GameRecord = parse_json_or_continue!(line, errors, line_no);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $errors:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                $errors.push($crate::error::BatchValidationError {
                    item_context: $context,
                    message: format!("Invalid JSON record: {}", e),
                });
                continue;
            }
        }
    };
}

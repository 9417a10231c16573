//! # Test helpers
//!
//! - `cli_runner`: `CliRunner` runs the Cargo-built `slidepuzzle` binary in a scratch
//!   directory and captures stdout, stderr, the exit code and the elapsed time.
//! - `records`: builds game records for the verify tests.
//!
//! ```rust,ignore
//! use crate::helpers::cli_runner::CliRunner;
//!
//! let cli = CliRunner::new();
//! let res = cli.run(&["deal", "--seed", "1"]);
//! assert_eq!(res.exit_code, 0);
//! ```

pub mod cli_runner;
pub mod records;

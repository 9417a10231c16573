//! # Slidepuzzle CLI Library
//!
//! This library provides the command-line interface for the sliding tile puzzle engine.
//! It exposes subcommands for playing in the terminal, dealing scrambled boards, and
//! verifying recorded games.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = vec!["slidepuzzle", "verify", "--input", "missing.jsonl"];
//! let code = slidepuzzle_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 2);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Solve scrambled boards interactively
//! - `deal`: Scramble a single board for inspection
//! - `verify`: Re-derive and replay recorded games
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
mod macros;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, SlidePuzzleCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "deal", "verify", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
///
/// # Available Commands
///
/// - `play [--size N] [--shuffle-min K] [--seed S] [--record FILE]`: Interactive session
/// - `deal [--size N] [--shuffle-min K] [--seed S] [--path]`: Print one scrambled board
/// - `verify --input FILE`: Check recorded games
/// - `cfg`: Display configuration settings
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SlidePuzzleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }

            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Slidepuzzle CLI");
            write_or_exit!(err, "Usage: slidepuzzle <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: slidepuzzle --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            size,
            shuffle_min,
            seed,
            record,
        } => resolve_board(size, shuffle_min, seed).and_then(|(board, seed)| {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(board, seed, record, out, err, &mut stdin_lock)
        }),
        Commands::Deal {
            size,
            shuffle_min,
            seed,
            path,
        } => resolve_board(size, shuffle_min, seed)
            .and_then(|(board, seed)| handle_deal_command(board, seed, path, out)),
        Commands::Verify { input } => handle_verify_command(input, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Applies command-line overrides on top of the resolved configuration. Board limits are
/// checked on the merged values only.
fn resolve_board(
    size: Option<usize>,
    shuffle_min: Option<u32>,
    seed: Option<u64>,
) -> Result<(slidepuzzle_engine::rules::BoardConfig, Option<u64>), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let board = cfg.board_config(size, shuffle_min)?;
    Ok((board, seed.or(cfg.seed)))
}

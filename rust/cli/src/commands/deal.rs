//! Deal command handler for scrambling and displaying a single board.
//!
//! This module provides the `deal` command which builds one scrambled board and
//! prints it along with the seed and the scramble depth. The command supports
//! optional seeding for deterministic output.

use crate::error::CliError;
use crate::formatters::{format_board, format_path};
use slidepuzzle_engine::board::Board;
use slidepuzzle_engine::rules::BoardConfig;
use std::io::Write;

/// Handle the deal command.
///
/// Scrambles a board with the given parameters and writes the seed, the
/// scramble depth and the board. With `show_path`, the blank's scramble walk is
/// printed as well.
///
/// # Arguments
///
/// * `config` - Validated board parameters
/// * `seed` - Optional RNG seed for a deterministic scramble
/// * `show_path` - Whether to print the scramble walk
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(
    config: BoardConfig,
    seed: Option<u64>,
    show_path: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let board = Board::new_with_seed(config, seed);

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Size: {}x{}", config.size(), config.size())?;
    writeln!(
        out,
        "Scramble: {} moves (minimum {})",
        board.move_history().len(),
        config.shuffle_min()
    )?;
    writeln!(out, "{}", format_board(&board))?;
    if show_path {
        writeln!(out, "Path: {}", format_path(board.move_history()))?;
    }
    Ok(())
}

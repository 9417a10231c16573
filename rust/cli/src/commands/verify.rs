//! Verify command handler module.
//!
//! Checks JSONL game records by rebuilding each game from its seed and replaying it:
//!
//! - Valid game ids (format: YYYYMMDD-NNNNNN)
//! - A seed and a supported board size are present
//! - The recorded scramble walk is exactly the one the seed produces
//! - Every recorded move is legal when replayed in order
//! - The replayed board agrees with the recorded `solved` flag
//!
//! Errors are collected using the shared `BatchValidationError` pattern for structured reporting.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text;
use crate::parse_json_or_continue;
use crate::ui;
use slidepuzzle_engine::board::Board;
use slidepuzzle_engine::logger::GameRecord;
use slidepuzzle_engine::rules::BoardConfig;
use std::io::Write;

/// Type alias for verify-specific batch validation errors.
/// The `usize` context is the 1-based line number of the record.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command - replay recorded games and check them.
///
/// # Arguments
///
/// * `input` - Path to a JSONL file of game records
/// * `out` - Output stream for the verification summary (stdout)
/// * `err` - Output stream for per-record failures (stderr)
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` if every record checks out, otherwise an `Err` that maps to
/// exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use slidepuzzle_cli::commands::handle_verify_command;
/// let input = "data/games.jsonl".to_string();
/// let result = handle_verify_command(input, &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text(&input).map_err(CliError::InvalidInput)?;

    let mut errors: Vec<VerifyError> = Vec::new();
    let mut games = 0usize;
    let mut solved = 0usize;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        games += 1;

        let record: GameRecord = parse_json_or_continue!(line, errors, line_no);
        match verify_record(&record) {
            Ok(()) => {
                if record.solved {
                    solved += 1;
                }
            }
            Err(message) => errors.push(VerifyError {
                item_context: line_no,
                message: format!("{}: {}", record.game_id, message),
            }),
        }
    }

    if games == 0 {
        ui::write_error(err, "no game records found")?;
        return Err(CliError::InvalidInput(format!(
            "{} contains no game records",
            input
        )));
    }

    for e in &errors {
        ui::write_error(err, &format!("line {}", e))?;
    }

    if errors.is_empty() {
        writeln!(out, "Verify: OK ({} games, {} solved)", games, solved)?;
        Ok(())
    } else {
        writeln!(
            out,
            "Verify: FAILED ({} of {} games invalid)",
            errors.len(),
            games
        )?;
        Err(CliError::InvalidInput(format!(
            "{} of {} game records failed verification",
            errors.len(),
            games
        )))
    }
}

fn valid_game_id(s: &str) -> bool {
    s.len() == 15
        && s[0..8].chars().all(|c| c.is_ascii_digit())
        && &s[8..9] == "-"
        && s[9..].chars().all(|c| c.is_ascii_digit())
}

/// Rebuilds the game described by `record` and replays its moves.
fn verify_record(record: &GameRecord) -> Result<(), String> {
    if !record.game_id.is_ascii() || !valid_game_id(&record.game_id) {
        return Err(format!("invalid game id '{}'", record.game_id));
    }
    let seed = record
        .seed
        .ok_or_else(|| "missing seed, game cannot be re-derived".to_string())?;
    let config = BoardConfig::new(record.size, record.shuffle_min).map_err(|e| e.to_string())?;

    let mut board = Board::new_with_seed(config, seed);
    if board.move_history() != record.scramble.as_slice() {
        return Err("scramble walk does not match seed".to_string());
    }

    for (i, &p) in record.moves.iter().enumerate() {
        if !board.submit_move(p) {
            return Err(format!("move {} to {} is not legal", i + 1, p));
        }
    }

    if board.is_solved() != record.solved {
        return Err(format!(
            "recorded solved={} but replay ends with solved={}",
            record.solved,
            board.is_solved()
        ));
    }
    Ok(())
}

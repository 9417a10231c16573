//! # Play Command
//!
//! Interactive sliding puzzle in the terminal.
//!
//! This module is the presentation layer around the board engine. Each input line is one
//! tick: it is parsed into a cell or a slide direction and handed to the board, which applies
//! it when it is a legal move and silently ignores it otherwise. After every tick the board is
//! redrawn and checked for a win.
//!
//! ## Features
//!
//! - Cell input (`col row`) and direction input (`up`, `down`, `left`, `right`)
//! - Graceful quit handling (user can exit with 'q' or 'quit', or by closing stdin)
//! - Play-again prompt after each win, with a fresh board each time
//! - Optional JSONL record of every finished game for later verification

use crate::error::CliError;
use crate::formatters::format_board;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_move_input, parse_yes_no};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use slidepuzzle_engine::board::Board;
use slidepuzzle_engine::logger::{GameLogger, GameRecord};
use slidepuzzle_engine::position::Position;
use slidepuzzle_engine::rules::BoardConfig;
use std::io::{BufRead, ErrorKind, Write};
use tracing::info;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Solved,
    Quit,
}

/// Handle the play command: interactive puzzle session
///
/// # Arguments
///
/// * `config` - Validated board parameters
/// * `seed` - Session seed (default: random). The first game is scrambled with this seed;
///   later games draw their seeds from a generator seeded with it.
/// * `record` - Optional path of a JSONL file that receives one record per finished game
/// * `out` - Output stream for the board display
/// * `err` - Error stream for input errors
/// * `stdin` - Input stream for player moves
///
/// # Returns
///
/// * `Ok(())` when the player quits or declines another game
/// * `Err(CliError)` if the record file cannot be written or on I/O errors
///
/// # Examples
///
/// ```
/// use slidepuzzle_cli::commands::handle_play_command;
/// use slidepuzzle_engine::rules::BoardConfig;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("0 0\nq\n");
///
/// let cfg = BoardConfig::new(3, 10).unwrap();
/// handle_play_command(cfg, Some(7), None, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Games played: 1"));
/// ```
pub fn handle_play_command(
    config: BoardConfig,
    seed: Option<u64>,
    record: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let session_seed = seed.unwrap_or_else(rand::random);
    let mut logger = match record.as_deref() {
        Some(path) => Some(GameLogger::create(path).map_err(|e| {
            CliError::InvalidInput(format!("Cannot open record file {}: {}", path, e))
        })?),
        None => None,
    };

    writeln!(
        out,
        "play: size={} shuffle_min={} seed={}",
        config.size(),
        config.shuffle_min(),
        session_seed
    )?;
    writeln!(
        out,
        "Enter a tile as 'col row' (or up/down/left/right) to slide it into the blank; q to quit."
    )?;

    let mut seeds = ChaCha20Rng::seed_from_u64(session_seed);
    let mut game_seed = session_seed;
    let mut games = 0u32;
    let mut solved_games = 0u32;

    'session: loop {
        games += 1;
        let mut board = Board::new_with_seed(config, game_seed);
        info!(
            game = games,
            seed = game_seed,
            scramble = board.move_history().len(),
            "game started"
        );
        writeln!(out, "Game {} (seed={})", games, game_seed)?;
        render(out, &board)?;

        let mut moves: Vec<Position> = Vec::new();
        let outcome = play_game(&mut board, &mut moves, out, err, stdin)?;
        info!(game = games, moves = board.moves_made(), ?outcome, "game finished");

        let moves_made = board.moves_made();
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            let rec =
                GameRecord::from_board(id, Some(game_seed), config.shuffle_min(), &board, moves);
            logger.write(&rec)?;
        }

        if outcome == Outcome::Quit {
            break;
        }

        solved_games += 1;
        writeln!(out, "Congratulations! Solved in {} moves.", moves_made)?;

        loop {
            ui::prompt(out, "Play again? (y/n): ")?;
            let Some(answer) = next_line(stdin, err)? else {
                break 'session;
            };
            match parse_yes_no(&answer) {
                Some(true) => {
                    game_seed = seeds.next_u64();
                    continue 'session;
                }
                Some(false) => break 'session,
                None => ui::write_error(err, "Please answer y or n")?,
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Games played: {} (solved: {})", games, solved_games)?;
    Ok(())
}

/// Runs input ticks until the board is solved or the player quits. Accepted moves are
/// appended to `moves`.
fn play_game(
    board: &mut Board,
    moves: &mut Vec<Position>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Outcome, CliError> {
    loop {
        if board.is_solved() {
            return Ok(Outcome::Solved);
        }

        ui::prompt(out, "Move: ")?;
        let Some(line) = next_line(stdin, err)? else {
            writeln!(out)?;
            return Ok(Outcome::Quit);
        };

        match parse_move_input(&line) {
            ParseResult::Move(p) => {
                if board.submit_move(p) {
                    moves.push(p);
                }
            }
            ParseResult::Slide(direction) => {
                if board.slide(direction) {
                    // The blank now sits where the moved tile was
                    moves.push(board.blank_position());
                }
            }
            ParseResult::Quit => return Ok(Outcome::Quit),
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        }
        render(out, board)?;
    }
}

/// Next input line, or `None` on EOF. Lines that are not valid UTF-8 are reported and
/// skipped.
fn next_line(stdin: &mut dyn BufRead, err: &mut dyn Write) -> Result<Option<String>, CliError> {
    loop {
        match read_stdin_line(stdin) {
            Ok(line) => return Ok(line),
            Err(e) if e.kind() == ErrorKind::InvalidData => ui::write_error(err, &e.to_string())?,
            Err(e) => return Err(e.into()),
        }
    }
}

fn render(out: &mut dyn Write, board: &Board) -> Result<(), CliError> {
    writeln!(out, "{}", format_board(board))?;
    writeln!(out, "Moves: {}", board.moves_made())?;
    Ok(())
}

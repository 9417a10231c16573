//! Input parsing for the interactive play command.
//!
//! This module turns one line of player input into a board request. It handles:
//! - Cell coordinates (`col row`, `col,row`)
//! - Slide directions (`up`, `down`, `left`, `right` and their initials)
//! - Quit and play-again answers
//!
//! Parsing only checks the *shape* of the input. Whether a cell is a legal move is
//! decided by the board, which silently ignores anything that is not.

use slidepuzzle_engine::position::{Direction, Position};

/// Result type for parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A cell the player wants to move into the blank
    Move(Position),
    /// Slide the tile next to the blank in this direction
    Slide(Direction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a board request or special command.
///
/// Accepts the following input formats (case-insensitive):
/// - "C R" or "C,R" → Move to column C, row R (0-based)
/// - "u"/"up", "d"/"down", "l"/"left", "r"/"right" → Slide
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use slidepuzzle_cli::validation::{parse_move_input, ParseResult};
/// use slidepuzzle_engine::position::{Direction, Position};
///
/// assert_eq!(
///     parse_move_input("1 2"),
///     ParseResult::Move(Position::new(1, 2))
/// );
/// assert_eq!(parse_move_input("3,0"), ParseResult::Move(Position::new(3, 0)));
/// assert_eq!(parse_move_input("left"), ParseResult::Slide(Direction::Left));
/// assert_eq!(parse_move_input("q"), ParseResult::Quit);
///
/// match parse_move_input("jump") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts.len() == 1 {
        return match parts[0] {
            "q" | "quit" => ParseResult::Quit,
            "u" | "up" => ParseResult::Slide(Direction::Up),
            "d" | "down" => ParseResult::Slide(Direction::Down),
            "l" | "left" => ParseResult::Slide(Direction::Left),
            "r" | "right" => ParseResult::Slide(Direction::Right),
            other if other.parse::<usize>().is_ok() => ParseResult::Invalid(
                "A cell needs a column and a row (e.g., '1 2')".to_string(),
            ),
            other => ParseResult::Invalid(format!("Unrecognized input: {}", other)),
        };
    }

    if parts.len() > 2 {
        return ParseResult::Invalid(format!("Expected 'col row', got {} values", parts.len()));
    }

    match (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
        (Ok(col), Ok(row)) => ParseResult::Move(Position::new(col, row)),
        _ => ParseResult::Invalid(format!("Unrecognized input: {}", parts.join(" "))),
    }
}

/// Parse a yes/no answer. Returns `None` for anything else.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "q" | "quit" => Some(false),
        _ => None,
    }
}

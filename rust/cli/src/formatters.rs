//! Board and walk formatters for terminal display.
//!
//! This module provides pure functions for rendering puzzle state as text. Tiles
//! are shown with their 1-based labels (tile `k` is labelled `k + 1`, as on a
//! physical 15-puzzle) and the blank with a dot. Column and row indices are printed
//! around the grid so the player can read off the `col row` to type.
//!
//! ## Unicode vs ASCII Fallback
//!
//! The blank uses a middle dot (`·`) on terminals that render Unicode and a plain
//! `.` elsewhere, detected the same way as other terminal output in this crate.
//!
//! ## Example
//!
//! ```rust
//! use slidepuzzle_engine::board::Board;
//! use slidepuzzle_cli::formatters::format_board_with;
//!
//! let board = Board::from_tiles(2, vec![0, 1, 2, 3]).unwrap();
//! let text = format_board_with(&board, ".");
//! assert_eq!(text, "   0 1\n0  1 2\n1  3 .");
//! ```

use slidepuzzle_engine::board::Board;
use slidepuzzle_engine::position::Position;

/// Check if the terminal supports Unicode symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Symbol used for the blank cell on this terminal.
pub fn blank_symbol() -> &'static str {
    if supports_unicode() { "·" } else { "." }
}

/// Render the board as a grid with column and row indices.
pub fn format_board(board: &Board) -> String {
    format_board_with(board, blank_symbol())
}

/// Render the board using `blank` for the empty cell.
pub fn format_board_with(board: &Board, blank: &str) -> String {
    let size = board.size();
    let cell_width = digits(board.blank_id()).max(digits(size - 1));
    let label_width = digits(size - 1);

    let mut lines = Vec::with_capacity(size + 1);
    let mut header = " ".repeat(label_width + 1);
    for col in 0..size {
        header.push_str(&format!(" {:>w$}", col, w = cell_width));
    }
    lines.push(header);

    for (row, tiles) in board.rows().enumerate() {
        let mut line = format!("{:<w$} ", row, w = label_width);
        for &id in tiles {
            let cell = if id == board.blank_id() {
                blank.to_string()
            } else {
                (id + 1).to_string()
            };
            line.push_str(&format!(" {:>w$}", cell, w = cell_width));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Format a blank walk as space-separated `col,row` pairs.
///
/// ```rust
/// use slidepuzzle_engine::position::Position;
/// use slidepuzzle_cli::formatters::format_path;
///
/// let walk = [Position::new(2, 3), Position::new(2, 2)];
/// assert_eq!(format_path(&walk), "2,3 2,2");
/// ```
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(|p| format!("{},{}", p.col, p.row))
        .collect::<Vec<_>>()
        .join(" ")
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

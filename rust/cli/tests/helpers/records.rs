use slidepuzzle_engine::board::Board;
use slidepuzzle_engine::logger::GameRecord;
use slidepuzzle_engine::position::Position;
use slidepuzzle_engine::rules::BoardConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Moves that undo the scramble of `board`, starting next to the blank.
pub fn solving_moves(board: &Board) -> Vec<Position> {
    board
        .move_history()
        .iter()
        .rev()
        .skip(1)
        .copied()
        .chain(std::iter::once(Position::corner(board.size())))
        .collect()
}

/// A record of a game on a `size`x`size` board that was played to the end.
pub fn solved_record(seq: u32, seed: u64, size: usize, shuffle_min: u32) -> GameRecord {
    let config = BoardConfig::new(size, shuffle_min).expect("valid board config");
    let mut board = Board::new_with_seed(config, seed);
    let moves = solving_moves(&board);
    for &p in &moves {
        assert!(board.submit_move(p), "solving move {} rejected", p);
    }
    GameRecord::from_board(
        format!("20260101-{:06}", seq),
        Some(seed),
        shuffle_min,
        &board,
        moves,
    )
}

/// Writes records as JSONL into `dir/name` and returns the path.
pub fn write_jsonl(dir: &Path, name: &str, records: &[GameRecord]) -> PathBuf {
    let path = dir.join(name);
    let mut content = String::new();
    for rec in records {
        content.push_str(&serde_json::to_string(rec).expect("serialize record"));
        content.push('\n');
    }
    fs::write(&path, content).expect("write records");
    path
}

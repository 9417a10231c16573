use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::position::Position;

/// Complete record of one game: how the board was scrambled and which moves the player made.
/// Serialized to JSONL for game history and verification.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Identifier for this game (format: YYYYMMDD-NNNNNN), unique within one log file
    pub game_id: String,
    /// RNG seed the board was scrambled with (enables deterministic replay)
    pub seed: Option<u64>,
    /// Grid side length
    pub size: usize,
    /// Minimum scramble depth the board was built with
    pub shuffle_min: u32,
    /// Positions visited by the blank while scrambling
    pub scramble: Vec<Position>,
    /// Accepted player moves, in order
    pub moves: Vec<Position>,
    /// Whether the board was solved when the game ended
    pub solved: bool,
    /// Timestamp when the game ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    /// Captures the final state of `board` together with the moves that led there.
    pub fn from_board(
        game_id: String,
        seed: Option<u64>,
        shuffle_min: u32,
        board: &Board,
        moves: Vec<Position>,
    ) -> Self {
        Self {
            game_id,
            seed,
            size: board.size(),
            shuffle_min,
            scramble: board.move_history().to_vec(),
            moves,
            solved: board.is_solved(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Highest sequence number among `date`'s game ids in an existing log, or 0.
fn last_seq(path: &Path, date: &str) -> std::io::Result<u32> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };
    Ok(content
        .lines()
        .filter_map(|line| serde_json::from_str::<GameRecord>(line).ok())
        .filter_map(|rec| {
            rec.game_id
                .strip_prefix(date)?
                .strip_prefix('-')?
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0))
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a JSONL file, one object per line.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for appending, creating it and its parent directory when missing.
    ///
    /// Ids continue after the highest sequence number already recorded in the file for
    /// today's date, so repeated sessions on one file do not reuse ids.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = last_seq(path, &date)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

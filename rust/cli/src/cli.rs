//! Command-line argument definitions (clap derive).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "slidepuzzle",
    version,
    about = "Sliding tile puzzle for the terminal"
)]
pub struct SlidePuzzleCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: enter `col row` (or a direction) to slide a tile
    Play {
        /// Grid side length (default from config, 4)
        #[arg(long)]
        size: Option<usize>,
        /// Minimum number of scramble steps (default from config, 40)
        #[arg(long)]
        shuffle_min: Option<u32>,
        /// Session seed; the first game is scrambled with it directly
        #[arg(long)]
        seed: Option<u64>,
        /// Append a JSONL record of every finished game to this file
        #[arg(long)]
        record: Option<String>,
    },
    /// Scramble one board and print it
    Deal {
        #[arg(long)]
        size: Option<usize>,
        #[arg(long)]
        shuffle_min: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the walk the blank took while scrambling
        #[arg(long)]
        path: bool,
    },
    /// Re-derive and replay recorded games to check them
    Verify {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

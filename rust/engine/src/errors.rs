use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board size: {size} (must be between {min} and {max})")]
    InvalidSize { size: usize, min: usize, max: usize },
    #[error("Invalid shuffle_min: {shuffle_min} (must be at most {max})")]
    InvalidShuffleMin { shuffle_min: u32, max: u32 },
    #[error("Invalid tile layout: {reason}")]
    InvalidLayout { reason: String },
}

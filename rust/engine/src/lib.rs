//! # slidepuzzle-engine: Sliding Puzzle Board Engine
//!
//! A deterministic engine for the N×N sliding-tile puzzle (the 15-puzzle family).
//! Provides the board state machine, legal-move derivation, a reachability-preserving
//! scramble, win detection, and JSONL game records with reproducible RNG for replay and
//! verification.
//!
//! ## Core Modules
//!
//! - [`board`] - Board state, legal moves, move acceptance and win detection
//! - [`shuffle`] - Random-walk scramble with the no-immediate-undo rule
//! - [`position`] - Grid coordinates and directions
//! - [`rules`] - Board configuration, size limits and layout validation
//! - [`logger`] - GameRecord serialization and the JSONL game logger
//! - [`errors`] - Error types for board construction
//!
//! ## Quick Start
//!
//! ```rust
//! use slidepuzzle_engine::board::Board;
//! use slidepuzzle_engine::rules::BoardConfig;
//!
//! let mut board = Board::new_with_seed(BoardConfig::default(), 42);
//!
//! // Feed a move request each tick; illegal ones are silently ignored
//! let target = board.valid_moves()[0];
//! assert!(board.submit_move(target));
//!
//! // Read back the layout and win flag to render
//! for row in board.rows() {
//!     println!("{:?}", row);
//! }
//! println!("solved: {}", board.is_solved());
//! ```
//!
//! ## Deterministic Scrambles
//!
//! Every starting layout is reproducible from its seed:
//!
//! ```rust
//! use slidepuzzle_engine::board::Board;
//! use slidepuzzle_engine::rules::BoardConfig;
//!
//! let cfg = BoardConfig::new(3, 40).unwrap();
//! let a = Board::new_with_seed(cfg, 7);
//! let b = Board::new_with_seed(cfg, 7);
//! assert_eq!(a.tiles(), b.tiles());
//! assert_eq!(a.move_history(), b.move_history());
//! ```

pub mod board;
pub mod errors;
pub mod logger;
pub mod position;
pub mod rules;
pub mod shuffle;

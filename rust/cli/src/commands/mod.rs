//! Command handler modules for the slidepuzzle CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and, for `play`, the input stream passed as parameters
//! - Errors propagated via the `CliError` enum
//!
//! # Example
//!
//! ```rust
//! use slidepuzzle_cli::commands::handle_deal_command;
//! use slidepuzzle_engine::rules::BoardConfig;
//!
//! let mut out = Vec::new();
//! let cfg = BoardConfig::new(3, 8).unwrap();
//! handle_deal_command(cfg, Some(42), false, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Seed: 42"));
//! ```

pub mod cfg;
pub mod deal;
pub mod play;
pub mod verify;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use verify::handle_verify_command;

//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! puzzle settings together with where each value came from (default,
//! configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "size": {
//!     "value": 4,
//!     "source": "default"
//!   },
//!   "shuffle_min": {
//!     "value": 40,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "size": {
            "value": config.size,
            "source": sources.size,
        },
        "shuffle_min": {
            "value": config.shuffle_min,
            "source": sources.shuffle_min,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

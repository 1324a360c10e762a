//! Logger setup
//!
//! `RUST_LOG` wins when set. Otherwise the level comes from the number of
//! `-v` flags: warn, then debug, then trace.

use env_logger::Env;
use log::SetLoggerError;

/// Default filter for a given `-v` count
#[must_use]
pub const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global logger
///
/// Log lines go to stderr so they never interleave with the game board on
/// stdout.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
}

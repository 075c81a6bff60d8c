//! mazerun: grid maze puzzles from the command line.
//!
//! The binary is a thin wrapper: [`cli`] holds the argument definitions and
//! [`commands`] turns a parsed command into an [`Outcome`] using the
//! `maze-*` crates.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{Outcome, execute, run};

/// Initialise `env_logger`. `RUST_LOG`, when set, overrides `level`.
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

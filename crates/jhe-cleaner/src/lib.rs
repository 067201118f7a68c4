//! Binary crate internals: CLI definition and the single-sweep command.

mod cli;
mod commands;

pub use cli::Cli;
pub use commands::run_once;

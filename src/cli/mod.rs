//! Command-line surface: argument parsing and the interactive client.

mod commands;
mod repl;

pub use commands::{Cli, Command};
pub use repl::DecisionRepl;

//! CLI command definitions

use clap::{Parser, Subcommand};

/// CLI arguments for lotus-guess
#[derive(Parser, Debug)]
#[command(name = "lotus-guess")]
#[command(author, version, about = "Decide with flowers")]
#[command(long_about = r#"
LotusGuess answers a question with a handful of flowers. Pick one and its
meaning is your answer, with a shareable card and an optional record.

Configuration comes from LOTUSGUESS__* environment variables (and .env).

Example:
  lotus-guess ask
  lotus-guess ask --seed 7 --user-ref 0xabc
  lotus-guess serve --port 8080
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive session on stdin/stdout (default)
    Ask {
        /// Seed flower draws for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Account reference attached to recorded results
        #[arg(long, value_name = "REF")]
        user_ref: Option<String>,
    },
    /// Serve the card image and record endpoints over HTTP
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// The chosen command, interactive when none was given.
    pub fn chosen_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Ask {
            seed: None,
            user_ref: None,
        })
    }
}

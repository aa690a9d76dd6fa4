use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordset", version, about = "Turn a JSON word list into word|Definition lines")]
pub struct Cli {
    /// Log at debug level (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print one `word|Definition` line per meaning (default)
    Extract {
        /// JSON word list, defaults to WORDSET_INPUT
        path: Option<PathBuf>,
    },
    /// Look a word up in a definitions file
    Define {
        word: String,
        /// Definitions file, defaults to WORDSET_DEFINITIONS
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Extract { path: None }
    }
}

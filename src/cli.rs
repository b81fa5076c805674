use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Row width used by `chats` when none is given.
pub const DEFAULT_CHATS_WIDTH: usize = 72;

#[derive(Debug, Parser)]
#[command(name = "swiftchat", about = "Terminal-first mock chat client")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Print the sample chat list and exit
    Chats {
        /// Row width in terminal columns
        #[arg(long, default_value_t = DEFAULT_CHATS_WIDTH)]
        width: usize,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

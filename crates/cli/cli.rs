use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(about = "Manage console users from the terminal")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true)]
    pub debug: bool,

    /// Validate and print the request instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[arg(long, short = 'V')]
    pub version: bool,
}

#[derive(Subcommand, strum::Display, Debug, Clone)]
pub enum Commands {
    /// List users
    List {
        #[arg(long)]
        json: bool,
    },
    /// Create a new user
    Create {
        /// Image shown as avatar preview while filling the form
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Edit an existing user
    Edit {
        id: u64,

        /// Pick a new avatar image for the user
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    Config {
        #[command(subcommand)]
        subcommands: ConfigCommands,
    },
}

#[derive(Subcommand, strum::Display, Debug, Clone)]
pub enum ConfigCommands {
    /// Prompt for the API url and token again
    Reset,
    /// Print the active configuration
    Show,
}

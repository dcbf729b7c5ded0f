//! Command-line arguments for the checklist front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checklist")]
#[command(author, version, about = "Personal checklist", long_about = None)]
pub struct Cli {
    /// Directory holding the checklist database and logs
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show every item in order
    List,

    /// Add an item to the end of the list
    Add {
        /// Item title (must not be blank)
        title: String,

        /// Optional notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Mark an item done, or not done again
    Toggle {
        /// Item id, or its 1-based position in `list`
        target: String,
    },

    /// Remove an item
    Delete {
        /// Item id, or its 1-based position in `list`
        target: String,
    },

    /// Print the core version
    Version,
}

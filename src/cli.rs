use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::Status;

#[derive(Debug, Parser)]
#[command(
    name = "watchlist",
    version,
    about = "Keep track of movies and series to watch, watched and dropped"
)]
pub struct Cli {
    /// Catalog file to load and save
    #[arg(long, global = true, env = "WATCHLIST_DATA", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Log at debug level (overridden by WATCHLIST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a title to the to-watch list
    Add { name: String },
    /// Move a title to another list
    Move {
        name: String,
        #[arg(value_enum)]
        status: StatusArg,
    },
    /// Look up a title and show its status
    Search { name: String },
    /// Print every list
    List {
        /// Print one alphabetical table instead of one section per list
        #[arg(long)]
        sorted: bool,
    },
    /// Open the interactive view (default)
    Tui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    Watched,
    Dropped,
}

impl From<StatusArg> for Status {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => Status::Pending,
            StatusArg::Watched => Status::Watched,
            StatusArg::Dropped => Status::Dropped,
        }
    }
}

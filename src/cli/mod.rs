pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "A terminal Hacker News reader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stories from a feed
    List {
        /// Feed to load: top, new or best
        #[arg(default_value = "top")]
        kind: String,

        /// Maximum number of stories
        #[arg(short, long)]
        limit: Option<usize>,

        /// Warm the cache for the other feeds before exiting
        #[arg(long)]
        preload: bool,
    },
    /// Clear the story cache and reload a feed
    Refresh {
        /// Feed to reload: top, new or best
        #[arg(default_value = "top")]
        kind: String,

        /// Maximum number of stories
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show one story in detail
    Show {
        /// Story ID
        id: u64,
    },
    /// Open a story's link in the browser
    Open {
        /// Story ID
        id: u64,
    },
    /// Toggle a story's favorite state
    Fav {
        /// Story ID
        id: u64,
    },
    /// Remove a story from the favorites
    Unfav {
        /// Story ID
        id: u64,
    },
    /// List favorited stories
    Favorites,
    /// Remove all favorites
    ClearFavorites,
    /// Export favorites to a CSV file
    Export {
        /// Directory to write the CSV file into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

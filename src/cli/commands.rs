//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalog feed adapter CLI
#[derive(Parser, Debug)]
#[command(name = "dab-feed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Session cookie from `login` (with or without the `session=` prefix)
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search albums and tracks
    Search {
        /// Search terms
        query: String,
    },

    /// Load the page after a cursor printed by `search` or a previous `more`
    More {
        /// Category to continue
        #[arg(value_enum)]
        category: Category,

        /// The search terms
        query: String,

        /// Cursor of the previous page
        cursor: String,
    },

    /// Show album details and tracks
    Album {
        /// Album id
        id: String,
    },

    /// Show artist details and discography
    Artist {
        /// Artist id
        id: String,
    },

    /// Resolve the stream URL of a track
    Stream {
        /// Track id
        track_id: String,
    },

    /// Log in and print the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and print the session
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Show favourites and playlists
    Library,

    /// Add a track to favourites
    FavoriteAdd {
        /// Album containing the track
        #[arg(long)]
        album_id: String,

        /// Track id
        track_id: String,
    },

    /// Remove a track from favourites
    FavoriteRemove {
        /// Track id
        track_id: String,
    },

    /// Print the public link of an item
    Share {
        #[arg(value_enum)]
        kind: ShareKind,

        /// Item id
        id: String,

        /// Album of the track (tracks only)
        #[arg(long)]
        album_id: Option<String>,
    },

    /// Show the login form definitions
    Forms,
}

/// Search category
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    Albums,
    Tracks,
}

/// Kind of item to share
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShareKind {
    Track,
    Album,
    Artist,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document per line
    Json,
    /// Indented JSON
    Pretty,
}

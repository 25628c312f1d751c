//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xeno-reader")]
#[command(about = "Browse and extract the hidden file table on Xenogears disc images", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Identify a disc image and summarize its hidden table
    Info {
        /// Raw 2352-byte/sector disc image (.bin)
        image: PathBuf,
    },

    /// Print the hidden directory tree
    Tree {
        /// Raw 2352-byte/sector disc image (.bin)
        image: PathBuf,
    },

    /// Extract every file in the hidden tree to a directory
    Extract {
        /// Raw 2352-byte/sector disc image (.bin)
        image: PathBuf,

        /// Output directory (default: from settings, else <image>-extracted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show what would be written without reading or writing files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Do not write manifest.txt
        #[arg(long)]
        no_manifest: bool,

        /// Include SHA-1 checksums in the manifest
        #[arg(long)]
        sha1: bool,
    },

    /// Write one file from the hidden tree to stdout or a file
    Cat {
        /// Raw 2352-byte/sector disc image (.bin)
        image: PathBuf,

        /// Directory as named by `extract` (e.g. DIR_0000/DIR_0003), or / for the root
        dir: String,

        /// Index of the file within the directory
        index: usize,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the effective settings
    Show,
}

//! CLI argument definitions for scriptblock.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "scriptblock",
    version,
    about = "Apply buildscript/initscript configuration blocks to a script context"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this global config file instead of ~/.scriptblock/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a block manifest and report the resulting configuration targets
    Apply {
        /// Manifest file (defaults to blocks.toml in this or a parent directory)
        file: Option<PathBuf>,
        /// Script context: project, settings, global
        #[arg(short, long, default_value = "project")]
        context: String,
        /// Print the targets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which block keyword each script context accepts
    Contexts,
}

pub fn parse() -> Cli {
    Cli::parse()
}

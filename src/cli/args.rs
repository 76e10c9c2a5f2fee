//! Command line argument parsing for the respell CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// respell - a dictionary-driven spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "respell")]
#[command(about = "A dictionary-driven spelling corrector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RespellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RespellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more words against a corpus dictionary
    Check(CheckArgs),

    /// Read words from stdin and correct them one per line
    Interactive(InteractiveArgs),

    /// Generate synthetic misspellings and show the corrector recovering them
    Demo(DemoArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the corpus text file the dictionary is built from
    #[arg(short, long, env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Words to correct
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long, default_value = "3")]
    pub top: usize,

    /// Maximum edit distance to search (1-3)
    #[arg(long, default_value = "2")]
    pub max_distance: usize,
}

/// Arguments for the interactive command
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Path to the corpus text file the dictionary is built from
    #[arg(short, long, env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum number of suggestions per word
    #[arg(short = 'n', long, default_value = "3")]
    pub top: usize,

    /// Maximum edit distance to search (1-3)
    #[arg(long, default_value = "2")]
    pub max_distance: usize,
}

/// Arguments for the demo command
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Path to the corpus text file the dictionary is built from
    #[arg(short, long, env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Number of misspellings to generate
    #[arg(short, long, default_value = "10")]
    pub count: usize,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus text file the dictionary is built from
    #[arg(short, long, env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Number of top words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

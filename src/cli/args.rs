//! Command line argument parsing for Xyston using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Xyston - boolean and phrase search over a precomputed inverted index
#[derive(Parser, Debug, Clone)]
#[command(name = "xyston")]
#[command(about = "Boolean and phrase search over a precomputed inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XystonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Disable ANSI colors in human output
    #[arg(long)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XystonArgs {
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
    /// Evaluate boolean and phrase queries against a loaded index
    Search(SearchArgs),

    /// Preview the inverted and forward indexes
    Preview(PreviewArgs),

    /// Compute a statistical stopword threshold over term frequencies
    Stopwords(StopwordsArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Directory holding the part-* partition files
    #[arg(short = 'i', long, default_value = "output")]
    pub index_dir: PathBuf,

    /// Directory holding the original input documents, for snippets
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Show index previews before searching
    #[arg(long)]
    pub preview: bool,

    /// Fields shown on each side of a matched field in a snippet
    #[arg(long, default_value_t = 4)]
    pub snippet_radius: usize,

    /// Raw query tokens, e.g. `cat AND dog`
    #[arg(required = true, trailing_var_arg = true)]
    pub query: Vec<String>,
}

/// Arguments for the preview command
#[derive(Parser, Debug, Clone)]
pub struct PreviewArgs {
    /// Directory holding the part-* partition files
    #[arg(short = 'i', long, default_value = "output")]
    pub index_dir: PathBuf,

    /// Number of index entries to preview
    #[arg(long, default_value_t = 10)]
    pub entries: usize,

    /// Maximum characters of each previewed entry
    #[arg(long, default_value_t = 75)]
    pub width: usize,
}

/// Arguments for the stopwords command
#[derive(Parser, Debug, Clone)]
pub struct StopwordsArgs {
    /// File of `term<TAB>count` frequency records
    pub freq_file: PathBuf,

    /// Standard deviations above the mean a stopword's count must exceed
    #[arg(long, default_value_t = 3.0)]
    pub sigma: f64,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

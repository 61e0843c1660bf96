use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables with colors
    Terminal,
    /// Machine-readable report
    Json,
    /// Markdown report
    Markdown,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CountStrategy {
    /// Pattern-matching counter (canonical)
    Pattern,
    /// Plain character-scan counter
    Scan,
}

#[derive(Parser, Debug)]
#[command(name = "lisix")]
#[command(about = "Readability analyzer for French texts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute text statistics and all seven readability scores
    Analyze {
        /// Plain-text file to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Lexical counting strategy
        #[arg(long, value_enum, default_value = "pattern")]
        strategy: CountStrategy,
    },

    /// Quick LIX-only score with the simplified difficulty scale
    Lix {
        /// Plain-text file to analyze
        path: PathBuf,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Translate a YAML document into conflang constant declarations
#[derive(Debug, Clone, Parser)]
#[command(name = "conflang", version, about)]
pub struct Cli {
    /// Read YAML from this file instead of standard input
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the translation to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Load configuration from this file instead of config/conflang
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Deepest mapping/sequence nesting accepted
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;

/// In-memory student roster with a terminal menu
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Use the line-oriented console instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Start with an empty roster instead of the two sample students
    #[arg(long)]
    pub empty: bool,

    /// Append log records to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

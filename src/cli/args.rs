// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::sink::ReportFormat;

#[derive(Parser)]
#[command(name = "cotag", version, about = "Tag co-occurrence graph and nearest-neighbor reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Print debug diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file to use instead of ./cotag.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the graph from tag files and report each tag's heaviest neighbors
    Knn {
        /// Tag file, or directory of tag files
        #[arg(value_name = "PATH")]
        input: PathBuf,
        /// Write the report here instead of stdout (truncated first)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
        /// Neighbors listed per tag
        #[arg(long, short)]
        k: Option<usize>,
        /// Minimum occurrence count for a tag to be reported
        #[arg(long, short = 't', value_name = "N")]
        threshold: Option<usize>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Convert a text kNN report into a Graphviz DOT file
    Dot {
        #[arg(value_name = "REPORT")]
        source: PathBuf,
        #[arg(value_name = "DOT_FILE")]
        target: PathBuf,
    },
}

/// Arguments for the knn command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct KnnArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub k: Option<usize>,
    pub threshold: Option<usize>,
    pub format: ReportFormat,
}

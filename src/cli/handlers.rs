// src/cli/handlers.rs
//! Command handlers: wire the feed, graph, query and sinks together.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::args::KnnArgs;
use crate::config::Config;
use crate::dot;
use crate::error::CotagError;
use crate::exit::CotagExit;
use crate::feed::BatchReader;
use crate::graph::{KnnQuery, TagGraph};
use crate::sink::{FileSink, StdoutSink};

/// Builds the graph from `args.input` and writes the kNN report.
///
/// # Errors
/// Returns error if the input is missing or the report cannot be written.
pub fn handle_knn(args: &KnnArgs, config: &Config) -> Result<CotagExit> {
    let query = KnnQuery::new(
        args.k.unwrap_or(config.query.k),
        args.threshold.unwrap_or(config.query.weight_threshold),
    );

    let mut graph = TagGraph::new();
    let stats = BatchReader::new(config.feed.max_tags).feed(&args.input, &mut graph)?;
    debug!(
        "graph built: {} tags, {} pairs from {} batches",
        graph.len(),
        graph.edge_count(),
        stats.batches
    );

    let written = match &args.output {
        Some(path) => {
            let mut sink = FileSink::create(path)?;
            let written = query
                .emit(&graph, &mut sink, args.format)
                .with_context(|| format!("writing report to {}", path.display()))?;
            debug!("report written to {}", sink.path().display());
            written
        }
        None => query.emit(&graph, &mut StdoutSink, args.format)?,
    };
    debug!(
        "reported {written} tags (k = {}, threshold = {})",
        query.k, query.weight_threshold
    );
    Ok(CotagExit::Success)
}

/// Converts a text report at `source` into a DOT file at `target`.
///
/// # Errors
/// Returns error if the report is unreadable or malformed, or the write fails.
pub fn handle_dot(source: &Path, target: &Path, config: &Config) -> Result<CotagExit> {
    if !source.exists() {
        return Err(CotagError::MissingInput(source.to_path_buf()).into());
    }
    let report = fs::read_to_string(source).map_err(|e| CotagError::io(source, e))?;
    let document = dot::render(&report, &config.dot)
        .with_context(|| format!("parsing report {}", source.display()))?;
    fs::write(target, document).map_err(|e| CotagError::io(target, e))?;
    debug!("wrote {}", target.display());
    Ok(CotagExit::Success)
}

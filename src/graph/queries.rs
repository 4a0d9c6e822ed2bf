// src/graph/queries.rs
//! Top-k neighbor reports over a built graph.

use std::fmt;

use serde::Serialize;

use super::tag_graph::TagGraph;
use super::types::{Edge, Node};
use crate::error::Result;
use crate::sink::{LineSink, ReportFormat};

/// Per-tag "k heaviest neighbors" query, filtered by occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnnQuery {
    /// Maximum number of neighbors listed per tag.
    pub k: usize,
    /// Tags seen fewer times than this are left out of the report.
    pub weight_threshold: usize,
}

/// One report row: a tag, its occurrence count and its heaviest neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnnEntry {
    pub label: String,
    pub occurrences: usize,
    pub neighbors: Vec<Edge>,
}

impl KnnQuery {
    #[must_use]
    pub fn new(k: usize, weight_threshold: usize) -> Self {
        Self { k, weight_threshold }
    }

    /// Report rows in ascending label order.
    ///
    /// The graph is only read: neighbors are ranked in a scratch copy, so the
    /// stored label order stays intact and further updates remain valid.
    #[must_use]
    pub fn entries(&self, graph: &TagGraph) -> Vec<KnnEntry> {
        graph
            .iter()
            .filter_map(|(label, node)| self.entry(label, node))
            .collect()
    }

    /// Report rows rendered in the text line format.
    #[must_use]
    pub fn lines(&self, graph: &TagGraph) -> Vec<String> {
        self.entries(graph).iter().map(ToString::to_string).collect()
    }

    /// Streams the report into `sink`, one line per qualifying tag.
    ///
    /// # Errors
    /// Returns error if the sink fails to write or JSON encoding fails.
    pub fn emit(
        &self,
        graph: &TagGraph,
        sink: &mut dyn LineSink,
        format: ReportFormat,
    ) -> Result<usize> {
        let mut written = 0;
        for (label, node) in graph.iter() {
            let Some(entry) = self.entry(label, node) else {
                continue;
            };
            sink.emit(&entry.render(format)?)?;
            written += 1;
        }
        Ok(written)
    }

    fn entry(&self, label: &str, node: &Node) -> Option<KnnEntry> {
        if node.occurrences < self.weight_threshold {
            return None;
        }
        Some(KnnEntry {
            label: label.to_owned(),
            occurrences: node.occurrences,
            neighbors: top_k(&node.neighbors, self.k),
        })
    }
}

/// Heaviest `k` edges, ties kept in their incoming (label) order.
fn top_k(neighbors: &[Edge], k: usize) -> Vec<Edge> {
    let mut ranked: Vec<&Edge> = neighbors.iter().collect();
    ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
    ranked.into_iter().take(k).cloned().collect()
}

impl KnnEntry {
    /// Renders the row in the requested report format.
    ///
    /// # Errors
    /// Returns error if JSON encoding fails.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for KnnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}:", self.label, self.occurrences)?;
        for edge in &self.neighbors {
            write!(f, " ({},{})", edge.label, edge.weight)?;
        }
        Ok(())
    }
}

// src/graph/tag_graph.rs
//! The co-occurrence graph and its read interface.

use std::collections::BTreeMap;

use super::builder;
use super::types::Node;

/// Weighted tag co-occurrence graph.
///
/// Nodes are keyed by label and iterate in lexicographic (byte) order.
/// Nothing is ever removed; updates only add nodes or raise counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGraph {
    nodes: BTreeMap<String, Node>,
}

impl TagGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one batch of co-occurring tags into the graph.
    pub fn update<S: AsRef<str>>(&mut self, tags: &[S]) {
        builder::apply_batch(&mut self.nodes, tags);
    }

    /// Folds every batch in order.
    pub fn update_all<I, B, S>(&mut self, batches: I)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[S]>,
        S: AsRef<str>,
    {
        for batch in batches {
            self.update(batch.as_ref());
        }
    }

    #[must_use]
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    /// Edge weight from `from` to `to`, if the two ever co-occurred.
    #[must_use]
    pub fn weight(&self, from: &str, to: &str) -> Option<usize> {
        self.node(from).and_then(|n| n.edge(to)).map(|e| e.weight)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(label, node)| (label.as_str(), node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges (each co-occurring pair counted once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.nodes.values().map(|n| n.neighbors.len()).sum();
        directed / 2
    }
}

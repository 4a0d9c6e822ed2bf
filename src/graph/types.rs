// src/graph/types.rs
//! Value types stored in the co-occurrence graph.

use serde::Serialize;

/// A neighbor of some tag and the number of batches the two shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub label: String,
    pub weight: usize,
}

impl Edge {
    #[must_use]
    pub fn new(label: impl Into<String>, weight: usize) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// Per-tag state: how often the tag was seen and who it was seen with.
///
/// `neighbors` is kept sorted ascending by label with unique labels, so
/// lookups and inserts are a binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub(crate) occurrences: usize,
    pub(crate) neighbors: Vec<Edge>,
}

impl Node {
    /// Number of batch positions that carried this tag.
    #[must_use]
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Neighbor edges in ascending label order.
    #[must_use]
    pub fn neighbors(&self) -> &[Edge] {
        &self.neighbors
    }

    #[must_use]
    pub fn edge(&self, label: &str) -> Option<&Edge> {
        self.position(label)
            .ok()
            .and_then(|idx| self.neighbors.get(idx))
    }

    /// Increments the edge towards `label`, inserting it in order if absent.
    pub(crate) fn bump_edge(&mut self, label: &str) {
        match self.position(label) {
            Ok(idx) => {
                if let Some(edge) = self.neighbors.get_mut(idx) {
                    edge.weight += 1;
                }
            }
            Err(idx) => self.neighbors.insert(idx, Edge::new(label, 1)),
        }
    }

    fn position(&self, label: &str) -> Result<usize, usize> {
        self.neighbors
            .binary_search_by(|e| e.label.as_str().cmp(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(node: &Node) -> Vec<&str> {
        node.neighbors().iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_bump_inserts_in_label_order() {
        let mut node = Node::default();
        for label in ["m", "c", "x", "a", "c"] {
            node.bump_edge(label);
        }
        assert_eq!(labels(&node), vec!["a", "c", "m", "x"]);
        assert_eq!(node.edge("c").map(|e| e.weight), Some(2));
        assert_eq!(node.edge("a").map(|e| e.weight), Some(1));
    }

    #[test]
    fn test_edge_lookup_missing() {
        let mut node = Node::default();
        node.bump_edge("b");
        assert!(node.edge("a").is_none());
        assert!(node.edge("c").is_none());
    }

    #[test]
    fn test_labels_compare_bytewise() {
        let mut node = Node::default();
        for label in ["b", "B", "é", "a"] {
            node.bump_edge(label);
        }
        assert_eq!(labels(&node), vec!["B", "a", "b", "é"]);
    }
}

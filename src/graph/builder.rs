// src/graph/builder.rs
//! Incremental graph construction: folds one tag batch into the node map.

use std::collections::BTreeMap;

use super::types::Node;

/// Applies one batch of co-occurring tags.
///
/// Every position counts: a tag listed twice in the same batch gets its
/// occurrence count bumped twice, and every distinct neighbor's edge is
/// bumped once per position on both sides. Comparisons are exact string
/// equality.
pub fn apply_batch<S: AsRef<str>>(nodes: &mut BTreeMap<String, Node>, tags: &[S]) {
    for tag in tags {
        let tag = tag.as_ref();
        let node = nodes.entry(tag.to_owned()).or_default();
        node.occurrences += 1;
        link_neighbors(node, tag, tags);
    }
}

fn link_neighbors<S: AsRef<str>>(node: &mut Node, tag: &str, batch: &[S]) {
    for other in batch {
        let other = other.as_ref();
        if other != tag {
            node.bump_edge(other);
        }
    }
}

// src/graph/mod.rs
pub mod builder;
pub mod queries;
pub mod tag_graph;
pub mod types;

pub use queries::{KnnEntry, KnnQuery};
pub use tag_graph::TagGraph;
pub use types::{Edge, Node};

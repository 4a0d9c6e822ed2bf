// src/lib.rs
//! Incremental tag co-occurrence graph with per-tag top-k neighbor reports.

pub mod cli;
pub mod config;
pub mod dot;
pub mod error;
pub mod exit;
pub mod feed;
pub mod graph;
pub mod sink;

pub use graph::{Edge, KnnEntry, KnnQuery, Node, TagGraph};

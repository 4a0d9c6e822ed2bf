// src/config/types.rs
use serde::{Deserialize, Serialize};

/// Top-level `cotag.toml` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub dot: DotConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Neighbors listed per tag.
    #[serde(default = "default_k")]
    pub k: usize,
    /// Minimum occurrence count for a tag to be reported.
    #[serde(default = "default_weight_threshold")]
    pub weight_threshold: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            weight_threshold: default_weight_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
        }
    }
}

/// Scaling knobs for the Graphviz export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotConfig {
    /// Occurrence count that maps to the base node size.
    #[serde(default = "default_min_node_weight")]
    pub min_node_weight: usize,
    #[serde(default = "default_edge_ratio")]
    pub edge_ratio: usize,
    #[serde(default = "default_node_size_factor")]
    pub node_size_factor: f64,
    #[serde(default = "default_font_size_min")]
    pub font_size_min: usize,
    #[serde(default = "default_font_size_max")]
    pub font_size_max: usize,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            min_node_weight: default_min_node_weight(),
            edge_ratio: default_edge_ratio(),
            node_size_factor: default_node_size_factor(),
            font_size_min: default_font_size_min(),
            font_size_max: default_font_size_max(),
        }
    }
}

const fn default_k() -> usize { 10 }
const fn default_weight_threshold() -> usize { 1 }
const fn default_max_tags() -> usize { crate::feed::DEFAULT_MAX_TAGS }

const fn default_min_node_weight() -> usize { 40 }
const fn default_edge_ratio() -> usize { 5 }
const fn default_node_size_factor() -> f64 { 0.05 }
const fn default_font_size_min() -> usize { 3 }
const fn default_font_size_max() -> usize { 11 }

// src/feed.rs
//! Reads tag batches from block-formatted text files.
//!
//! A block is a link line, a title line and zero or more tag lines, closed
//! by an empty line. Each complete block yields one batch holding its tags.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{CotagError, Result};
use crate::graph::TagGraph;

/// Default cap on tags kept from a single block.
pub const DEFAULT_MAX_TAGS: usize = 100;

/// Counters from one feed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub files: usize,
    pub skipped_files: usize,
    pub batches: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Link,
    Title,
    Tags,
}

/// Splits block-formatted input into batches.
#[derive(Debug, Clone, Copy)]
pub struct BatchReader {
    max_tags: usize,
}

impl Default for BatchReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TAGS)
    }
}

impl BatchReader {
    /// Creates a reader keeping at most `max_tags` tags per block.
    #[must_use]
    pub fn new(max_tags: usize) -> Self {
        Self { max_tags }
    }

    /// Parses in-memory text into batches, in input order.
    #[must_use]
    pub fn read_str(&self, text: &str) -> Vec<Vec<String>> {
        let mut batches = Vec::new();
        self.scan(text, |batch| batches.push(batch));
        batches
    }

    /// Parses one file. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn read_file(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        let text = read_lossy(path)?;
        Ok(self.read_str(&text))
    }

    /// Streams every batch under `path` into `graph`.
    ///
    /// `path` may be a single file or a directory; a directory contributes
    /// the regular files directly inside it, in file-name order. Unreadable
    /// files inside a directory are skipped with a warning.
    ///
    /// # Errors
    /// Returns error if `path` does not exist or a single-file input cannot
    /// be read.
    pub fn feed(&self, path: &Path, graph: &mut TagGraph) -> Result<FeedStats> {
        if !path.exists() {
            return Err(CotagError::MissingInput(path.to_path_buf()));
        }

        let mut stats = FeedStats::default();
        if path.is_dir() {
            for file in list_dir(path, &mut stats) {
                match self.read_file(&file) {
                    Ok(batches) => apply_batches(batches, graph, &mut stats),
                    Err(e) => {
                        warn!("skipping {}: {e}", file.display());
                        stats.skipped_files += 1;
                    }
                }
            }
        } else {
            let batches = self.read_file(path)?;
            apply_batches(batches, graph, &mut stats);
        }

        debug!(
            "fed {} batches from {} files ({} skipped)",
            stats.batches, stats.files, stats.skipped_files
        );
        Ok(stats)
    }

    fn scan<F>(&self, text: &str, mut on_batch: F)
    where
        F: FnMut(Vec<String>),
    {
        let mut state = BlockState::Link;
        let mut tags: Vec<String> = Vec::new();

        for line in text.lines() {
            if line.is_empty() {
                if state == BlockState::Tags && !tags.is_empty() {
                    on_batch(std::mem::take(&mut tags));
                }
                tags.clear();
                state = BlockState::Link;
                continue;
            }
            match state {
                BlockState::Link => state = BlockState::Title,
                BlockState::Title => state = BlockState::Tags,
                BlockState::Tags => {
                    if tags.len() < self.max_tags {
                        tags.push(line.to_owned());
                    }
                }
            }
        }

        // Last block may run into end of input without a closing blank line.
        if state == BlockState::Tags && !tags.is_empty() {
            on_batch(tags);
        }
    }
}

fn apply_batches(batches: Vec<Vec<String>>, graph: &mut TagGraph, stats: &mut FeedStats) {
    stats.files += 1;
    stats.batches += batches.len();
    graph.update_all(&batches);
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| CotagError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn list_dir(dir: &Path, stats: &mut FeedStats) -> Vec<PathBuf> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut files = Vec::new();
    for item in walker {
        match item {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                warn!("skipping entry in {}: {e}", dir.display());
                stats.skipped_files += 1;
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
photos/1/
Sunset
sky
sea

photos/2/
City
sky
night

";

    #[test]
    fn test_blocks_become_batches() {
        let batches = BatchReader::default().read_str(SAMPLE);
        assert_eq!(batches, vec![vec!["sky", "sea"], vec!["sky", "night"]]);
    }

    #[test]
    fn test_incomplete_blocks_dropped() {
        let text = "photos/1/\n\nphotos/2/\nTitle only\n\nphotos/3/\nT\na\n\n";
        let batches = BatchReader::default().read_str(text);
        assert_eq!(batches, vec![vec!["a"]]);
    }

    #[test]
    fn test_trailing_block_without_blank_line() {
        let text = "photos/1/\nT\na\nb";
        let batches = BatchReader::default().read_str(text);
        assert_eq!(batches, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_max_tags_truncates_block() {
        let text = "l\nt\na\nb\nc\nd\n\n";
        let batches = BatchReader::new(2).read_str(text);
        assert_eq!(batches, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_crlf_and_whitespace_tags() {
        let text = "l\r\nt\r\n  spaced tag \r\nb\r\n\r\n";
        let batches = BatchReader::default().read_str(text);
        assert_eq!(batches, vec![vec!["  spaced tag ", "b"]]);
    }

    #[test]
    fn test_consecutive_blank_lines() {
        let text = "\n\nl\nt\nx\ny\n\n\n\nl\nt\nz\n";
        let batches = BatchReader::default().read_str(text);
        assert_eq!(batches, vec![vec!["x", "y"], vec!["z"]]);
    }
}

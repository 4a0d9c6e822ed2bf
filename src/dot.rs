// src/dot.rs
//! Graphviz export of a kNN report.
//!
//! Node size grows with the tag's occurrence count; an edge is drawn once per
//! pair (from the lexicographically smaller label) and only when it is heavy
//! relative to the node it is drawn from.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::DotConfig;
use crate::error::{CotagError, Result};
use crate::graph::{Edge, KnnEntry};

const HEADER: &str = "graph Tags {\n\
\tratio = \"compress\";\n\
\tsize = 8;\n\
\tnodesep = 0.1;\n\
\transep = 1.5;\n\n";

static HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?): (\d+):(.*)$").unwrap_or_else(|_| panic!("Invalid Regex"))
});
static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((.+?),(\d+)\)(?:\s|$)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Parses one text report line back into an entry.
///
/// # Errors
/// Returns `MalformedLine` if the `label: count:` header is missing.
pub fn parse_line(line: &str, line_no: usize) -> Result<KnnEntry> {
    let malformed = || CotagError::MalformedLine {
        line_no,
        line: line.to_owned(),
    };
    let caps = HEAD_RE.captures(line.trim_end()).ok_or_else(malformed)?;
    let occurrences = caps[2].parse().map_err(|_| malformed())?;

    let tail = &caps[3];
    if !PAIR_RE.replace_all(tail, "").trim().is_empty() {
        return Err(malformed());
    }

    let mut neighbors = Vec::new();
    for pair in PAIR_RE.captures_iter(tail) {
        let weight = pair[2].parse().map_err(|_| malformed())?;
        neighbors.push(Edge::new(&pair[1], weight));
    }

    Ok(KnnEntry {
        label: caps[1].to_owned(),
        occurrences,
        neighbors,
    })
}

/// Converts a text report into a DOT document. Blank lines are ignored.
///
/// # Errors
/// Returns `MalformedLine` for the first line that does not parse.
pub fn render(report: &str, config: &DotConfig) -> Result<String> {
    let mut entries = Vec::new();
    for (idx, line) in report.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(parse_line(line, idx + 1)?);
    }
    Ok(render_entries(&entries, config))
}

#[must_use]
pub fn render_entries(entries: &[KnnEntry], config: &DotConfig) -> String {
    let mut out = String::from(HEADER);
    for entry in entries {
        write_node(&mut out, entry, config);
    }
    out.push('}');
    out.push('\n');
    out
}

#[allow(clippy::cast_precision_loss)]
fn write_node(out: &mut String, entry: &KnnEntry, config: &DotConfig) {
    let min_weight = config.min_node_weight.max(1);
    let size = config.node_size_factor * entry.occurrences as f64 / min_weight as f64;
    let font = (config.font_size_min.saturating_mul(entry.occurrences) / min_weight)
        .min(config.font_size_max);

    let _ = writeln!(
        out,
        "\t\"{}\" [width = {:.2}, height = {:.2}, fontsize = {}];",
        escape(&entry.label),
        2.0 * size,
        size,
        font
    );

    for edge in &entry.neighbors {
        if edge.label.as_str() <= entry.label.as_str() {
            continue;
        }
        let weight = config.edge_ratio.saturating_mul(edge.weight) / entry.occurrences.max(1);
        if weight > 0 {
            let _ = writeln!(
                out,
                "\t\"{}\" -- \"{}\" [weight = {}];",
                escape(&entry.label),
                escape(&edge.label),
                weight
            );
        }
    }
    out.push('\n');
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let entry = parse_line("sky: 40: (sea,12) (blue sky,3)", 1).unwrap();
        assert_eq!(entry.label, "sky");
        assert_eq!(entry.occurrences, 40);
        assert_eq!(
            entry.neighbors,
            vec![Edge::new("sea", 12), Edge::new("blue sky", 3)]
        );
    }

    #[test]
    fn test_parse_header_only_and_trailing_space() {
        let entry = parse_line("a: 2: ", 1).unwrap();
        assert!(entry.neighbors.is_empty());
        let entry = parse_line("a: 2:", 1).unwrap();
        assert_eq!(entry.occurrences, 2);
    }

    #[test]
    fn test_parse_label_with_comma() {
        let entry = parse_line("a: 1: (x,y,4)", 1).unwrap();
        assert_eq!(entry.neighbors, vec![Edge::new("x,y", 4)]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_line("not a report line", 7).unwrap_err();
        assert!(matches!(err, CotagError::MalformedLine { line_no: 7, .. }));
    }

    #[test]
    fn test_render_sizes_and_edges() {
        let report = "a: 80: (b,40) (c,4)\nb: 40: (a,40)\n";
        let dot = render(report, &DotConfig::default()).unwrap();

        assert!(dot.starts_with("graph Tags {\n"));
        assert!(dot.contains("\t\"a\" [width = 0.20, height = 0.10, fontsize = 6];\n"));
        assert!(dot.contains("\t\"a\" -- \"b\" [weight = 2];\n"));
        // 5 * 4 / 80 rounds down to zero.
        assert!(!dot.contains("\"c\" ["));
        assert!(!dot.contains("-- \"c\""));
        // b -> a is drawn from a only.
        assert!(!dot.contains("\"b\" -- \"a\""));
        assert!(dot.contains("\t\"b\" [width = 0.10, height = 0.05, fontsize = 3];\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_font_size_capped() {
        let dot = render("big: 4000:\n", &DotConfig::default()).unwrap();
        assert!(dot.contains("fontsize = 11];"));
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        let err = parse_line("a: 2: garbage here", 4).unwrap_err();
        assert!(matches!(err, CotagError::MalformedLine { line_no: 4, .. }));
        assert!(parse_line("a: 2: (b,1) junk", 1).is_err());
    }

    #[test]
    fn test_huge_counts_do_not_overflow() {
        let report = format!("a: {max}: (b,{max})\nb: {max}: (a,{max})\n", max = usize::MAX);
        let dot = render(&report, &DotConfig::default()).unwrap();
        assert!(dot.contains("fontsize = 11];"));
        // Saturated numerator divided by the same count.
        assert!(dot.contains("\t\"a\" -- \"b\" [weight = 1];"));
    }

    #[test]
    fn test_escapes_quotes() {
        let dot = render("say \"hi\": 40:\n", &DotConfig::default()).unwrap();
        assert!(dot.contains("\"say \\\"hi\\\"\""));
    }
}

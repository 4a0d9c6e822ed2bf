// src/sink.rs
//! Line-oriented report destinations.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{CotagError, Result};

/// Line encoding used for report rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `label: count: (neighbor,weight) ...`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Receives report lines in order.
pub trait LineSink {
    /// Writes one line; the sink supplies the line terminator.
    ///
    /// # Errors
    /// Returns error if the underlying destination rejects the write.
    fn emit(&mut self, line: &str) -> Result<()>;
}

/// Writes lines to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&mut self, line: &str) -> Result<()> {
        write_line(&mut io::stdout().lock(), line, Path::new("<stdout>"))
    }
}

/// Writes lines to a file.
///
/// The file is truncated when the sink is created, so a run that emits
/// nothing still clears stale output. Each line is then appended with its
/// own write.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Creates or truncates `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be created or reopened for append.
    pub fn create(path: &Path) -> Result<Self> {
        File::create(path).map_err(|e| CotagError::io(path, e))?;
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| CotagError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileSink {
    fn emit(&mut self, line: &str) -> Result<()> {
        write_line(&mut self.file, line, &self.path)
    }
}

/// One `write` call per line, terminator included.
fn write_line<W: Write>(out: &mut W, line: &str, origin: &Path) -> Result<()> {
    out.write_all(format!("{line}\n").as_bytes())
        .map_err(|e| CotagError::io(origin, e))
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_sink_truncates_then_appends() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("knn.txt");
        fs::write(&path, "stale line\nmore stale\n")?;

        let mut sink = FileSink::create(&path)?;
        assert_eq!(fs::read_to_string(&path)?, "");

        sink.emit("a: 1: (b,1)")?;
        sink.emit("b: 1: (a,1)")?;
        assert_eq!(fs::read_to_string(&path)?, "a: 1: (b,1)\nb: 1: (a,1)\n");
        Ok(())
    }

    #[test]
    fn test_file_sink_missing_dir_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = FileSink::create(&path).unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn test_write_line_appends_terminator() -> Result<()> {
        let mut out: Vec<u8> = Vec::new();
        write_line(&mut out, "a: 1: (b,1)", Path::new("<buffer>"))?;
        write_line(&mut out, "b: 1:", Path::new("<buffer>"))?;
        assert_eq!(String::from_utf8_lossy(&out), "a: 1: (b,1)\nb: 1:\n");
        Ok(())
    }

    #[test]
    fn test_stdout_sink_emits() -> Result<()> {
        let mut sink = StdoutSink;
        sink.emit("c: 1:")?;
        Ok(())
    }

    #[test]
    fn test_vec_sink_collects() -> Result<()> {
        let mut lines: Vec<String> = Vec::new();
        lines.emit("one")?;
        lines.emit("two")?;
        assert_eq!(lines, vec!["one", "two"]);
        Ok(())
    }
}

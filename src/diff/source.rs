//! Diff sources.
//!
//! A source produces the complete unified diff up front; the scanner does
//! not consume streams.

use crate::error::{GateError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Something that can produce a unified diff as one text blob.
pub trait DiffSource {
    /// Human readable name of the source, for logs.
    fn describe(&self) -> String;

    /// Read the whole diff.
    fn read_diff(&self) -> Result<String>;
}

/// Reads the diff from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DiffSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_diff(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| GateError::SourceError(format!("{}: {}", self.path.display(), e)))?;
        // Diffs of binary or mis-encoded files must not abort the gate.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Reads the diff from standard input until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl DiffSource for StdinSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_diff(&self) -> Result<String> {
        let mut bytes = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .map_err(|e| GateError::SourceError(format!("<stdin>: {}", e)))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// A diff already held in memory.
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DiffSource for TextSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn read_diff(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Pick the source for a CLI argument: a path, `-` or nothing for stdin.
pub fn source_for(arg: Option<&Path>) -> Box<dyn DiffSource> {
    match arg {
        Some(path) if path != Path::new("-") => Box::new(FileSource::new(path)),
        _ => Box::new(StdinSource),
    }
}

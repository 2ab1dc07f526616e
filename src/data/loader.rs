use std::fs;
use std::io;
use std::path::Path;

use crate::models::QuizEntry;

/// Error loading a corpus file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Read(io::Error),
    /// The file contents were not valid JSON for a list of entries.
    Parse(serde_json::Error),
    /// The file parsed but contained no entries.
    Empty,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Read(e) => write!(f, "failed to read corpus file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse corpus file: {}", e),
            LoadError::Empty => write!(f, "corpus file must contain at least one entry"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

/// Parse a JSON array of `{"question": ..., "answer": ...}` objects.
pub fn parse_entries(json: &str) -> Result<Vec<QuizEntry>, LoadError> {
    let entries: Vec<QuizEntry> = serde_json::from_str(json).map_err(LoadError::Parse)?;
    if entries.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(entries)
}

/// Load a corpus from a JSON file.
pub fn load_entries_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuizEntry>, LoadError> {
    let json = fs::read_to_string(path).map_err(LoadError::Read)?;
    parse_entries(&json)
}

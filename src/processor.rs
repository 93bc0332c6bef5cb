//! File processing pipeline
//!
//! Wraps the extraction core with file-level concerns: reading the input,
//! rendering the JSON document, and writing it out. Errors fold into a small
//! taxonomy the binary can print directly.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::extract::{parse_entry_map, EntryMap};

/// Errors surfaced by the file pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    InputNotFound(String),
    Io(String),
    Serialize(String),
}

impl std::error::Error for ExtractError {}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InputNotFound(path) => write!(f, "input not found: {}", path),
            ExtractError::Io(msg) => write!(f, "IO error: {}", msg),
            ExtractError::Serialize(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

/// Read `path` and extract its entry map.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<EntryMap, ExtractError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ExtractError::InputNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(|e| ExtractError::Io(e.to_string()))?;
    Ok(parse_entry_map(&content))
}

/// Render the map as a pretty-printed JSON document: two-space indent, keys
/// in declaration order, non-ASCII written as-is.
pub fn render_json(entries: &EntryMap) -> Result<String, ExtractError> {
    serde_json::to_string_pretty(entries).map_err(|e| ExtractError::Serialize(e.to_string()))
}

/// Write `document` to `path`, creating parent directories as needed.
pub fn write_json<P: AsRef<Path>>(path: P, document: &str) -> Result<(), ExtractError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ExtractError::Io(e.to_string()))?;
        }
    }
    fs::write(path, document).map_err(|e| ExtractError::Io(e.to_string()))
}

use std::fs;
use std::path::Path;

use thiserror::Error;

pub const BUILTIN_KEYWORDS: &[&str] = &[
    "covid",
    "vaccine",
    "pandemic",
    "coronavirus",
    "mask",
    "quarantine",
    "lockdown",
    "infection",
    "symptoms",
    "immunity",
];

#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("keyword file {0} contains no keywords")]
    Empty(String),
}

pub fn builtin_keywords() -> Vec<String> {
    BUILTIN_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

/// Loads a keyword list from a newline-separated file. Terms are lowercased
/// and deduplicated; blank lines and `#` comments are skipped.
pub fn load_keywords(path: &Path) -> Result<Vec<String>, KeywordError> {
    let raw = fs::read_to_string(path)?;
    let mut out: Vec<String> = Vec::new();
    for line in raw.lines() {
        let term = line.trim();
        if term.is_empty() || term.starts_with('#') {
            continue;
        }
        let term = term.to_lowercase();
        if !out.contains(&term) {
            out.push(term);
        }
    }
    if out.is_empty() {
        return Err(KeywordError::Empty(path.display().to_string()));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/relevance/keywords.rs"]
mod tests;

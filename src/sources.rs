//! Collects raw version history from every configured place
//!
//! Entries are gathered as plain strings; nothing here validates them.

use crate::boundary::BoundaryWarning;
use crate::domain::TagPattern;
use crate::error::Result;
use crate::git::{history_from_tags, TagSource};
use std::fs;
use std::path::Path;

/// Raw history entries plus the warnings met while collecting them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedHistory {
    pub entries: Vec<String>,
    pub warnings: Vec<BoundaryWarning>,
}

impl CollectedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal entries
    pub fn add_entries<S: AsRef<str>>(&mut self, entries: &[S]) {
        self.entries
            .extend(entries.iter().map(|e| e.as_ref().to_string()));
    }

    /// Append entries from a history file
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let entries = read_history_file(path)?;
        self.entries.extend(entries);
        Ok(())
    }

    /// Append the versions of all tags matching `pattern`
    pub fn add_tags<T: TagSource + ?Sized>(
        &mut self,
        source: &T,
        pattern: &TagPattern,
    ) -> Result<()> {
        let (entries, skipped) = history_from_tags(source, pattern)?;
        self.entries.extend(entries);
        self.warnings.extend(skipped);
        Ok(())
    }
}

/// Read a history file: one version per line. Blank lines and lines
/// starting with `#` are ignored; surrounding whitespace is trimmed.
pub fn read_history_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_history_lines(&content))
}

fn parse_history_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

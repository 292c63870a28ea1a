use crate::error::Result;
use crate::git::TagSource;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository { tags: Vec::new() }
    }

    /// Create a mock repository holding the given tags
    pub fn with_tags(tags: &[&str]) -> Self {
        MockRepository {
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

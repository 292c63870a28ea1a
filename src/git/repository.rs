use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::TagSource for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tag_names = self.repo.tag_names(None)?;

        let mut tags: Vec<String> = tag_names.iter().flatten().map(String::from).collect();
        tags.sort();

        Ok(tags)
    }
}

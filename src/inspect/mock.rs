use crate::domain::ApiSnapshot;
use crate::error::{ApiSemverError, Result};
use crate::inspect::ArtifactInspector;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock inspector for testing without artifacts on disk
pub struct MockInspector {
    artifacts: HashMap<PathBuf, ApiSnapshot>,
}

impl MockInspector {
    /// Create a new mock inspector with no artifacts
    pub fn new() -> Self {
        MockInspector {
            artifacts: HashMap::new(),
        }
    }

    /// Register an artifact at a path
    pub fn add_artifact(&mut self, path: impl Into<PathBuf>, snapshot: ApiSnapshot) {
        self.artifacts.insert(path.into(), snapshot);
    }

    /// Builder form of [`MockInspector::add_artifact`]
    pub fn with_artifact(mut self, path: impl Into<PathBuf>, snapshot: ApiSnapshot) -> Self {
        self.add_artifact(path, snapshot);
        self
    }

    fn get(&self, path: &Path) -> Result<&ApiSnapshot> {
        self.artifacts
            .get(path)
            .ok_or_else(|| ApiSemverError::load(format!("Artifact not found: {}", path.display())))
    }
}

impl Default for MockInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactInspector for MockInspector {
    fn exists(&self, path: &Path) -> bool {
        self.artifacts.contains_key(path)
    }

    fn load_snapshot(&self, path: &Path) -> Result<ApiSnapshot> {
        self.get(path).cloned()
    }

    fn read_embedded_version(&self, path: &Path) -> Result<String> {
        self.get(path)?.version.clone().ok_or_else(|| {
            ApiSemverError::load(format!("No embedded version in {}", path.display()))
        })
    }
}

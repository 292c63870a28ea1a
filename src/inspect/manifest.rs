use crate::domain::ApiSnapshot;
use crate::error::{ApiSemverError, Result};
use crate::inspect::ArtifactInspector;
use std::fs;
use std::path::Path;

/// Reads API snapshots from TOML manifest files
///
/// ```toml
/// version = "1.0.0"
///
/// [[types]]
/// name = "Acme.Widget"
/// base_type = "System.Object"
/// interfaces = ["IDisposable"]
/// methods = ["void Dispose()"]
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestInspector;

impl ManifestInspector {
    pub fn new() -> Self {
        ManifestInspector
    }
}

impl ArtifactInspector for ManifestInspector {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load_snapshot(&self, path: &Path) -> Result<ApiSnapshot> {
        let content = fs::read_to_string(path).map_err(|e| {
            ApiSemverError::load(format!("Cannot read manifest {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ApiSemverError::load(format!("Malformed manifest {}: {}", path.display(), e))
        })
    }

    fn read_embedded_version(&self, path: &Path) -> Result<String> {
        self.load_snapshot(path)?.version.ok_or_else(|| {
            ApiSemverError::load(format!(
                "Manifest {} declares no embedded version",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn manifest(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_snapshot() {
        let file = manifest(
            r#"
version = "2.1.0"

[[types]]
name = "Widget"
methods = ["void Run()"]
"#,
        );

        let inspector = ManifestInspector::new();
        assert!(inspector.exists(file.path()));

        let snapshot = inspector.load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.types[0].name, "Widget");
        assert_eq!(inspector.read_embedded_version(file.path()).unwrap(), "2.1.0");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let inspector = ManifestInspector::new();
        let path = Path::new("/nonexistent/artifact.toml");
        assert!(!inspector.exists(path));

        let err = inspector.load_snapshot(path).unwrap_err();
        assert!(matches!(err, ApiSemverError::Load(_)));
    }

    #[test]
    fn test_malformed_manifest_is_load_error() {
        let file = manifest("[[types]\nname = ");
        let err = ManifestInspector::new().load_snapshot(file.path()).unwrap_err();
        assert!(err.to_string().contains("Malformed manifest"));
    }

    #[test]
    fn test_missing_embedded_version() {
        let file = manifest("types = []\n");
        let err = ManifestInspector::new()
            .read_embedded_version(file.path())
            .unwrap_err();
        assert!(err.to_string().contains("declares no embedded version"));
    }
}

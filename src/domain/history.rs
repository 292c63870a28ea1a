use crate::boundary::BoundaryWarning;
use crate::domain::version::SemanticVersion;
use tracing::debug;

/// Previously published versions, parsed once per request.
///
/// The history is a multiset: duplicates are kept and entries that fail to
/// parse are dropped. Dropped entries are remembered as warnings for reporting.
#[derive(Debug, Clone, Default)]
pub struct VersionHistory {
    versions: Vec<SemanticVersion>,
    skipped: Vec<BoundaryWarning>,
}

impl VersionHistory {
    /// Parse raw version strings, silently dropping the invalid ones
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut versions = Vec::with_capacity(raw.len());
        let mut skipped = Vec::new();

        for entry in raw {
            let entry = entry.as_ref();
            match SemanticVersion::parse(entry) {
                Ok(version) => versions.push(version),
                Err(e) => {
                    debug!(entry, error = %e, "dropping unparseable history entry");
                    skipped.push(BoundaryWarning::UnparsableVersion {
                        raw: entry.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        VersionHistory { versions, skipped }
    }

    /// Valid versions, in input order
    pub fn versions(&self) -> &[SemanticVersion] {
        &self.versions
    }

    /// Entries that were dropped during parsing
    pub fn skipped(&self) -> &[BoundaryWarning] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Best stand-in for a previous version when no artifact is available:
    /// the highest release version, or the highest version overall if every
    /// entry is a pre-release. `None` only for an empty history.
    pub fn latest_release(&self) -> Option<&SemanticVersion> {
        self.versions
            .iter()
            .filter(|v| !v.is_prerelease())
            .max()
            .or_else(|| self.versions.iter().max())
    }

    /// Highest version sharing `major.minor` with the target
    pub fn bracket_max(&self, major: u64, minor: u64) -> Option<&SemanticVersion> {
        self.versions
            .iter()
            .filter(|v| v.in_bracket(major, minor))
            .max()
    }
}

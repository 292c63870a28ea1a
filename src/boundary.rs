use std::fmt;

/// Non-fatal conditions met while gathering inputs for a version decision.
/// These never abort an analysis but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A history entry is not a valid semantic version and was dropped
    UnparsableVersion { raw: String, reason: String },
    /// A git tag does not match the configured tag pattern and was skipped
    TagMismatchPattern { tag: String, pattern: String },
    /// The previous artifact does not exist; the change is treated as breaking
    MissingPreviousArtifact { path: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableVersion { raw, reason } => {
                write!(f, "Ignoring history entry '{}': {}", raw, reason)
            }
            BoundaryWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Tag '{}' does not match pattern '{}'", tag, pattern)
            }
            BoundaryWarning::MissingPreviousArtifact { path } => {
                write!(
                    f,
                    "Previous artifact '{}' not found; treating as a breaking change",
                    path
                )
            }
        }
    }
}

//! Domain logic - pure version rules independent of artifacts, git and I/O

pub mod history;
pub mod label;
pub mod snapshot;
pub mod tag;
pub mod version;

pub use history::VersionHistory;
pub use label::{ReleaseLabels, DEFAULT_PRERELEASE};
pub use snapshot::{ApiSnapshot, TypeSnapshot};
pub use tag::TagPattern;
pub use version::{SemanticVersion, VersionBump};

//! Git tags as a source of version history
//!
//! The [TagSource] trait abstracts where tag names come from:
//!
//! - [repository::Git2Repository]: a real repository read through the `git2` crate
//! - [mock::MockRepository]: an in-memory tag list for testing
//!
//! [history_from_tags] turns tag names into raw history entries using a
//! [TagPattern]; the resulting strings are parsed later like any other history.
//!
//! ```rust
//! # use api_semver::git::{history_from_tags, TagSource};
//! # use api_semver::domain::TagPattern;
//! # fn example<T: TagSource>(repo: &T) -> api_semver::Result<()> {
//! let pattern = TagPattern::new("v{version}")?;
//! let (history, skipped) = history_from_tags(repo, &pattern)?;
//! println!("{} versions, {} tags skipped", history.len(), skipped.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::boundary::BoundaryWarning;
use crate::domain::TagPattern;
use crate::error::Result;
use tracing::debug;

/// Source of tag names
///
/// Errors from the underlying repository are mapped to
/// [crate::error::ApiSemverError::Git].
pub trait TagSource {
    /// Get all tags in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Sorted list of tag names
    /// * `Err` - If there's a Git error
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Version parts of every tag matching `pattern`.
///
/// Tags that do not match are returned as warnings rather than errors.
pub fn history_from_tags<T: TagSource + ?Sized>(
    source: &T,
    pattern: &TagPattern,
) -> Result<(Vec<String>, Vec<BoundaryWarning>)> {
    let mut history = Vec::new();
    let mut skipped = Vec::new();

    for tag in source.list_tags()? {
        match pattern.extract_version(&tag) {
            Some(version) => history.push(version.to_string()),
            None => {
                debug!(tag = %tag, pattern = pattern.as_str(), "tag does not match pattern");
                skipped.push(BoundaryWarning::TagMismatchPattern {
                    tag,
                    pattern: pattern.as_str().to_string(),
                });
            }
        }
    }

    Ok((history, skipped))
}

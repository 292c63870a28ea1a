//! Pre-release and build labels requested by the caller
//!
//! Labels are validated against the semver grammar up front, so a bad label
//! fails the request before any history lookup happens.
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{ApiSemverError, Result};
use semver::{BuildMetadata, Prerelease};

/// Label applied when no bracket match exists and the caller supplied none
pub const DEFAULT_PRERELEASE: &str = "alpha";

/// Labels explicitly supplied for the next version.
///
/// `None` means "not supplied". `Some` with an empty value is an explicit
/// request for no label, which matters for the pre-release: an explicit empty
/// label overrides both the default label and a label inherited from history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseLabels {
    pub prerelease: Option<Prerelease>,
    pub build: Option<BuildMetadata>,
}

impl ReleaseLabels {
    /// Validate raw label strings
    ///
    /// # Returns
    /// * `Ok(ReleaseLabels)` - Both labels are valid (or absent)
    /// * `Err` - A label contains characters outside `[0-9A-Za-z-.]` or empty identifiers
    pub fn parse(prerelease: Option<&str>, build: Option<&str>) -> Result<Self> {
        let prerelease = prerelease
            .map(|label| {
                Prerelease::new(label).map_err(|e| {
                    ApiSemverError::parse(format!("Invalid pre-release label '{}': {}", label, e))
                })
            })
            .transpose()?;

        let build = build
            .map(|label| {
                BuildMetadata::new(label).map_err(|e| {
                    ApiSemverError::parse(format!("Invalid build label '{}': {}", label, e))
                })
            })
            .transpose()?;

        Ok(ReleaseLabels { prerelease, build })
    }

    /// No labels supplied
    pub fn none() -> Self {
        ReleaseLabels::default()
    }
}

/// [`DEFAULT_PRERELEASE`] as a label
pub fn default_prerelease() -> Result<Prerelease> {
    parse_default_prerelease(DEFAULT_PRERELEASE)
}

/// Validate a default pre-release label from configuration
pub fn parse_default_prerelease(label: &str) -> Result<Prerelease> {
    Prerelease::new(label).map_err(|e| {
        ApiSemverError::config(format!(
            "Invalid default pre-release label '{}': {}",
            label, e
        ))
    })
}

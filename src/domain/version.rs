use crate::error::{ApiSemverError, Result};
use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version as used for history lookups and next-version selection.
///
/// Parsing and formatting are delegated to the `semver` crate. Ordering is our own:
/// major, minor and patch compare numerically; at an equal triple a version without
/// a pre-release label sorts above any labelled one, and two labels compare as plain
/// strings. Build metadata is carried along but never takes part in comparisons.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    inner: semver::Version,
}

impl SemanticVersion {
    /// Create a new release version with no labels
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`. Malformed input is never coerced.
    pub fn parse(input: &str) -> Result<Self> {
        semver::Version::parse(input)
            .map(|inner| SemanticVersion { inner })
            .map_err(|e| ApiSemverError::parse(format!("Invalid version '{}': {}", input, e)))
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Numeric part of the version
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.inner.major, self.inner.minor, self.inner.patch)
    }

    /// Pre-release label, if any
    pub fn pre_release(&self) -> Option<&str> {
        if self.inner.pre.is_empty() {
            None
        } else {
            Some(self.inner.pre.as_str())
        }
    }

    /// Build metadata, if any
    pub fn build(&self) -> Option<&str> {
        if self.inner.build.is_empty() {
            None
        } else {
            Some(self.inner.build.as_str())
        }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.inner.pre.is_empty()
    }

    /// Whether this version shares `major.minor` with the given bracket
    pub fn in_bracket(&self, major: u64, minor: u64) -> bool {
        self.inner.major == major && self.inner.minor == minor
    }

    /// Same version with the patch number incremented; labels are kept
    pub fn next_patch(&self) -> Result<Self> {
        let mut inner = self.inner.clone();
        inner.patch = increment(self.inner.patch, "patch", self)?;
        Ok(SemanticVersion { inner })
    }

    /// Replace the pre-release label. An empty label clears it.
    pub fn with_prerelease(mut self, pre: Prerelease) -> Self {
        self.inner.pre = pre;
        self
    }

    /// Replace the build metadata. Empty metadata clears it.
    pub fn with_build(mut self, build: BuildMetadata) -> Self {
        self.inner.build = build;
        self
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple()).then_with(|| {
            match (self.pre_release(), other.pre_release()) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            }
        })
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the ordering, so build metadata is ignored here too.
impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl FromStr for SemanticVersion {
    type Err = ApiSemverError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Classification of a change: the size of the version bump it calls for.
///
/// Variants are ordered by severity, so `max` over several outcomes picks the
/// one that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Target triple for this bump, starting from the previous version.
    ///
    /// - **Major**: `(major + 1, 0, 0)`
    /// - **Minor**: `(major, minor + 1, 0)`
    /// - **Patch**: the previous triple unchanged; the increment happens in the
    ///   bracket search
    ///
    /// Fails with [`ApiSemverError::Overflow`] when the bumped component is
    /// already `u64::MAX`.
    pub fn target_for(&self, previous: &SemanticVersion) -> Result<SemanticVersion> {
        let (major, minor, patch) = previous.triple();
        let target = match self {
            VersionBump::Major => SemanticVersion::new(increment(major, "major", previous)?, 0, 0),
            VersionBump::Minor => {
                SemanticVersion::new(major, increment(minor, "minor", previous)?, 0)
            }
            VersionBump::Patch => SemanticVersion::new(major, minor, patch),
        };
        Ok(target)
    }
}

fn increment(value: u64, component: &str, version: &SemanticVersion) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        ApiSemverError::overflow(format!("cannot increment the {} of {}", component, version))
    })
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Patch => write!(f, "Patch"),
            VersionBump::Minor => write!(f, "Minor"),
            VersionBump::Major => write!(f, "Major"),
        }
    }
}

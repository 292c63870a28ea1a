use crate::boundary::BoundaryWarning;
use crate::diff::{DiffResult, SnapshotDiffer};
use crate::domain::label::default_prerelease;
use crate::domain::{ApiSnapshot, ReleaseLabels, SemanticVersion, VersionBump, VersionHistory};
use crate::error::{ApiSemverError, Result};
use crate::inspect::ArtifactInspector;
use crate::rules::RuleSet;
use semver::Prerelease;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of comparing two artifacts
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// The recommended next version
    pub version: SemanticVersion,
    pub classification: VersionBump,
    /// The diff the classification was based on
    pub differences: DiffResult,
    /// Non-fatal conditions met along the way
    pub warnings: Vec<BoundaryWarning>,
}

impl AnalysisResult {
    /// The recommended version as a string
    pub fn version_number(&self) -> String {
        self.version.to_string()
    }
}

/// Picks the next version for an artifact from its API diff and the version history
pub struct VersionSelector<I: ArtifactInspector> {
    inspector: I,
    rules: RuleSet,
    differ: SnapshotDiffer,
    /// `None` until overridden; resolves to [`crate::domain::DEFAULT_PRERELEASE`]
    default_prerelease: Option<Prerelease>,
}

impl<I: ArtifactInspector> VersionSelector<I> {
    /// Create a selector with the standard rules and the "alpha" default label
    pub fn new(inspector: I) -> Self {
        VersionSelector {
            inspector,
            rules: RuleSet::default(),
            differ: SnapshotDiffer::new(),
            default_prerelease: None,
        }
    }

    /// Replace the rule set
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Label used when no bracket match exists and the caller gave none
    pub fn with_default_prerelease(mut self, label: Prerelease) -> Self {
        self.default_prerelease = Some(label);
        self
    }

    pub fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Recommend the next version for `current`, compared against `previous`.
    ///
    /// When `previous` does not exist the change is treated as breaking and
    /// the previous version comes from history alone.
    ///
    /// # Returns
    /// * `Ok(AnalysisResult)` - Version, classification and the diff used
    /// * `Err(Load)` - An existing artifact could not be introspected
    /// * `Err(Parse)` - The previous artifact's embedded version is malformed
    /// * `Err(InsufficientHistory)` - No previous artifact and no usable history
    /// * `Err(Overflow)` - The next version would not fit in `u64` components
    pub fn analyze<S: AsRef<str>>(
        &self,
        previous: &Path,
        current: &Path,
        history: &[S],
        labels: &ReleaseLabels,
    ) -> Result<AnalysisResult> {
        let mut warnings = Vec::new();
        let previous_exists = self.inspector.exists(previous);

        let current_snapshot = self.inspector.load_snapshot(current)?;
        let previous_snapshot = if previous_exists {
            self.inspector.load_snapshot(previous)?
        } else {
            warn!(
                path = %previous.display(),
                "previous artifact not found, forcing breaking change"
            );
            warnings.push(BoundaryWarning::MissingPreviousArtifact {
                path: previous.display().to_string(),
            });
            ApiSnapshot::default()
        };

        let differences = self.differ.diff(&previous_snapshot, &current_snapshot);
        let mut classification = self.rules.classify(&differences);

        let history = VersionHistory::parse(history);
        warnings.extend(history.skipped().iter().cloned());

        let previous_version = if previous_exists {
            // Ask the inspector only when the loaded snapshot carries no version
            let raw = match previous_snapshot.version.clone() {
                Some(raw) => raw,
                None => self.inspector.read_embedded_version(previous)?,
            };
            SemanticVersion::parse(&raw).map_err(|e| {
                ApiSemverError::parse(format!(
                    "Embedded version of {}: {}",
                    previous.display(),
                    e
                ))
            })?
        } else {
            classification = VersionBump::Major;
            previous_from_history(&history)?.clone()
        };

        let default_label = match &self.default_prerelease {
            Some(label) => label.clone(),
            None => default_prerelease()?,
        };
        let target = classification.target_for(&previous_version)?;
        let version = next_version(&history, &target, labels, &default_label)?;

        info!(
            previous = %previous_version,
            %classification,
            %version,
            "selected next version"
        );

        Ok(AnalysisResult {
            version,
            classification,
            differences,
            warnings,
        })
    }
}

/// Next version for a breaking change, from history alone
pub fn create_breaking_change<S: AsRef<str>>(
    history: &[S],
    labels: &ReleaseLabels,
) -> Result<SemanticVersion> {
    create_change(history, VersionBump::Major, labels, &default_prerelease()?)
}

/// Next version for added functionality, from history alone
pub fn create_feature_change<S: AsRef<str>>(
    history: &[S],
    labels: &ReleaseLabels,
) -> Result<SemanticVersion> {
    create_change(history, VersionBump::Minor, labels, &default_prerelease()?)
}

/// Next version for a given bump when no artifacts can be compared
/// (first release, manual override).
pub fn create_change<S: AsRef<str>>(
    history: &[S],
    bump: VersionBump,
    labels: &ReleaseLabels,
    default_prerelease: &Prerelease,
) -> Result<SemanticVersion> {
    change_from_history(&VersionHistory::parse(history), bump, labels, default_prerelease)
}

/// [`create_change`] over an already parsed history, so the caller keeps
/// access to [`VersionHistory::skipped`].
pub fn change_from_history(
    history: &VersionHistory,
    bump: VersionBump,
    labels: &ReleaseLabels,
    default_prerelease: &Prerelease,
) -> Result<SemanticVersion> {
    let previous = previous_from_history(history)?;
    let target = bump.target_for(previous)?;
    let version = next_version(history, &target, labels, default_prerelease)?;

    info!(previous = %previous, %bump, %version, "selected next version from history");
    Ok(version)
}

/// Search the history for the bracket of `target` and derive the next version.
///
/// - No version shares `major.minor` with the target: the target itself, labelled
///   with the supplied pre-release or else `default_prerelease`.
/// - Otherwise: the highest bracket member with its patch incremented. A supplied
///   pre-release replaces its label; if none was supplied the label is kept as is.
///
/// A supplied build label always replaces the build metadata.
///
/// Fails only when the bracket maximum's patch number cannot be incremented.
pub fn next_version(
    history: &VersionHistory,
    target: &SemanticVersion,
    labels: &ReleaseLabels,
    default_prerelease: &Prerelease,
) -> Result<SemanticVersion> {
    let version = match history.bracket_max(target.major(), target.minor()) {
        Some(matched) => {
            debug!(bracket = %matched, "found bracket match");
            let next = matched.next_patch()?;
            match &labels.prerelease {
                Some(pre) => next.with_prerelease(pre.clone()),
                None => next,
            }
        }
        None => {
            debug!(target = %target, "no bracket match");
            let pre = labels
                .prerelease
                .clone()
                .unwrap_or_else(|| default_prerelease.clone());
            target.clone().with_prerelease(pre)
        }
    };

    Ok(match &labels.build {
        Some(build) => version.with_build(build.clone()),
        None => version,
    })
}

fn previous_from_history(history: &VersionHistory) -> Result<&SemanticVersion> {
    history.latest_release().ok_or_else(|| {
        ApiSemverError::insufficient_history(
            "no previous artifact and no valid version in history",
        )
    })
}

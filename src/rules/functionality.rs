use crate::diff::DiffResult;
use crate::domain::VersionBump;
use crate::rules::Rule;

/// Fires when any existing type changed at all.
///
/// Coarse: it does not check that the change was purely
/// additive, and a diff that only adds new top-level types does not fire it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddedFunctionalityRule;

impl Rule for AddedFunctionalityRule {
    fn name(&self) -> &'static str {
        "added-functionality"
    }

    fn bump(&self) -> VersionBump {
        VersionBump::Minor
    }

    fn detect(&self, diff: &DiffResult) -> bool {
        !diff.changed_types.is_empty()
    }
}

use crate::diff::DiffResult;
use crate::domain::VersionBump;
use crate::rules::Rule;

/// Fires when consumers of the previous API may stop compiling or linking:
/// a removed type, a changed base type, a removed interface, or a removed
/// event, field or method. Any one condition is enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakingChangeRule;

impl Rule for BreakingChangeRule {
    fn name(&self) -> &'static str {
        "breaking-change"
    }

    fn bump(&self) -> VersionBump {
        VersionBump::Major
    }

    fn detect(&self, diff: &DiffResult) -> bool {
        if diff.added_removed_types.removed_count() > 0 {
            return true;
        }

        diff.changed_types.iter().any(|change| {
            change.has_changed_base_type
                || change.interfaces.has_removals()
                || change.has_removed_members()
        })
    }
}

use crate::diff::collection::{diff, diff_by};
use crate::diff::result::{AddedRemovedTypes, DiffResult, MemberChanges, TypeChange};
use crate::domain::{ApiSnapshot, TypeSnapshot};
use tracing::debug;

/// Builds a [`DiffResult`] from two API snapshots.
///
/// Types are matched by name and members by signature, so a member whose
/// signature changed shows up as one removal plus one addition.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotDiffer;

impl SnapshotDiffer {
    pub fn new() -> Self {
        SnapshotDiffer
    }

    pub fn diff(&self, previous: &ApiSnapshot, current: &ApiSnapshot) -> DiffResult {
        let types = diff_by(&previous.types, &current.types, |a, b| a.name == b.name);

        let added_removed_types = AddedRemovedTypes {
            added: types.added.iter().map(|t| t.name.clone()).collect(),
            removed: types.removed.iter().map(|t| t.name.clone()).collect(),
        };

        let mut changed_types = Vec::new();
        for old in &previous.types {
            let Some(new) = current.types.iter().find(|t| t.name == old.name) else {
                continue;
            };
            let change = compare_type(old, new);
            if !change.is_empty() {
                changed_types.push(change);
            }
        }

        debug!(
            added = added_removed_types.added_count(),
            removed = added_removed_types.removed_count(),
            changed = changed_types.len(),
            "computed API diff"
        );

        DiffResult::new(added_removed_types, changed_types)
    }
}

fn compare_type(old: &TypeSnapshot, new: &TypeSnapshot) -> TypeChange {
    TypeChange {
        name: old.name.clone(),
        has_changed_base_type: old.base_type != new.base_type,
        interfaces: member_changes(&old.interfaces, &new.interfaces),
        events: member_changes(&old.events, &new.events),
        fields: member_changes(&old.fields, &new.fields),
        methods: member_changes(&old.methods, &new.methods),
    }
}

fn member_changes(old: &[String], new: &[String]) -> MemberChanges {
    let result = diff(old, new);
    MemberChanges {
        added: result.added.into_iter().cloned().collect(),
        removed: result.removed.into_iter().cloned().collect(),
    }
}

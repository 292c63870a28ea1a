//! Aggregated record of API differences between two artifacts
//!
//! Built once by the differ and only read afterwards.

/// Names of top-level types that appeared or disappeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddedRemovedTypes {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl AddedRemovedTypes {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Added and removed members of one kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl MemberChanges {
    pub fn new(added: &[&str], removed: &[&str]) -> Self {
        MemberChanges {
            added: added.iter().map(|s| s.to_string()).collect(),
            removed: removed.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn has_removals(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Changes to a type present in both artifacts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeChange {
    pub name: String,
    pub has_changed_base_type: bool,
    pub interfaces: MemberChanges,
    pub events: MemberChanges,
    pub fields: MemberChanges,
    pub methods: MemberChanges,
}

impl TypeChange {
    pub fn new(name: impl Into<String>) -> Self {
        TypeChange {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether anything about the type differs
    pub fn is_empty(&self) -> bool {
        !self.has_changed_base_type
            && self.interfaces.is_empty()
            && self.events.is_empty()
            && self.fields.is_empty()
            && self.methods.is_empty()
    }

    /// Whether any event, field or method was removed
    pub fn has_removed_members(&self) -> bool {
        self.events.has_removals() || self.fields.has_removals() || self.methods.has_removals()
    }
}

/// Type-level additions, removals and per-type changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub added_removed_types: AddedRemovedTypes,
    pub changed_types: Vec<TypeChange>,
}

impl DiffResult {
    pub fn new(added_removed_types: AddedRemovedTypes, changed_types: Vec<TypeChange>) -> Self {
        DiffResult {
            added_removed_types,
            changed_types,
        }
    }

    /// No type was added, removed or changed
    pub fn is_empty(&self) -> bool {
        self.added_removed_types.added.is_empty()
            && self.added_removed_types.removed.is_empty()
            && self.changed_types.is_empty()
    }
}

//! Rule evaluators that classify a [`DiffResult`]
//!
//! Each rule is an independent detector. Rules never combine themselves; the
//! version selector asks every rule in a [`RuleSet`] and keeps the most
//! severe bump among the ones that fired.

pub mod breaking;
pub mod functionality;

pub use breaking::BreakingChangeRule;
pub use functionality::AddedFunctionalityRule;

use crate::diff::DiffResult;
use crate::domain::VersionBump;

/// A pure classifier over a diff.
///
/// Implementations hold no mutable state and never fail, so the same diff
/// always yields the same answer.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Bump this rule calls for when it fires
    fn bump(&self) -> VersionBump;

    /// Whether the diff exhibits the change this rule looks for
    fn detect(&self, diff: &DiffResult) -> bool;
}

/// Unordered collection of rules
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// An empty rule set; every diff classifies as a patch
    pub fn empty() -> Self {
        RuleSet { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names, in insertion order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Most severe bump among the rules that fire, or `Patch` when none does
    pub fn classify(&self, diff: &DiffResult) -> VersionBump {
        self.rules
            .iter()
            .filter(|rule| {
                let fired = rule.detect(diff);
                tracing::debug!(rule = rule.name(), fired, "evaluated rule");
                fired
            })
            .map(|rule| rule.bump())
            .max()
            .unwrap_or(VersionBump::Patch)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::empty()
            .with_rule(BreakingChangeRule)
            .with_rule(AddedFunctionalityRule)
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

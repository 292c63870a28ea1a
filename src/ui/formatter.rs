//! Pure formatting functions for UI output.
//!
//! `format_*` functions build plain text and are testable; `display_*`
//! functions print, styled through `console` when the terminal supports it.

use crate::analyzer::AnalysisResult;
use crate::boundary::BoundaryWarning;
use crate::diff::{DiffResult, MemberChanges};
use crate::domain::SemanticVersion;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a boundary warning to stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print the full analysis report.
pub fn display_analysis(result: &AnalysisResult) {
    println!(
        "\n{} {}",
        style("Next version:").bold(),
        style(result.version_number()).green().bold()
    );
    println!("{} {}", style("Classification:").bold(), result.classification);
    println!("{}", format_diff_summary(&result.differences));
}

/// Print a version selected from history alone.
pub fn display_version(version: &SemanticVersion) {
    println!(
        "{} {}",
        style("Next version:").bold(),
        style(version).green().bold()
    );
}

/// Summarize a diff: type counts followed by one line per changed type.
///
/// # Example
/// ```ignore
/// Types: 1 added, 0 removed, 1 changed
///   Widget: methods +1
/// ```
pub fn format_diff_summary(diff: &DiffResult) -> String {
    let types = &diff.added_removed_types;
    let mut lines = vec![format!(
        "Types: {} added, {} removed, {} changed",
        types.added_count(),
        types.removed_count(),
        diff.changed_types.len()
    )];

    for name in &types.removed {
        lines.push(format!("  - {}", name));
    }
    for name in &types.added {
        lines.push(format!("  + {}", name));
    }

    for change in &diff.changed_types {
        let mut parts = Vec::new();
        if change.has_changed_base_type {
            parts.push("base type changed".to_string());
        }
        for (label, members) in [
            ("interfaces", &change.interfaces),
            ("events", &change.events),
            ("fields", &change.fields),
            ("methods", &change.methods),
        ] {
            if let Some(part) = format_member_counts(label, members) {
                parts.push(part);
            }
        }
        lines.push(format!("  ~ {}: {}", change.name, parts.join(", ")));
    }

    lines.join("\n")
}

fn format_member_counts(label: &str, members: &MemberChanges) -> Option<String> {
    match (members.added.len(), members.removed.len()) {
        (0, 0) => None,
        (added, 0) => Some(format!("{} +{}", label, added)),
        (0, removed) => Some(format!("{} -{}", label, removed)),
        (added, removed) => Some(format!("{} +{}/-{}", label, added, removed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{AddedRemovedTypes, TypeChange};

    #[test]
    fn test_format_empty_diff() {
        assert_eq!(
            format_diff_summary(&DiffResult::default()),
            "Types: 0 added, 0 removed, 0 changed"
        );
    }

    #[test]
    fn test_format_diff_summary() {
        let diff = DiffResult::new(
            AddedRemovedTypes {
                added: vec!["Gizmo".to_string()],
                removed: vec!["Gadget".to_string()],
            },
            vec![TypeChange {
                has_changed_base_type: true,
                methods: MemberChanges::new(&["void Stop()"], &[]),
                fields: MemberChanges::new(&["long Count"], &["int Count"]),
                ..TypeChange::new("Widget")
            }],
        );

        let summary = format_diff_summary(&diff);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Types: 1 added, 1 removed, 1 changed");
        assert_eq!(lines[1], "  - Gadget");
        assert_eq!(lines[2], "  + Gizmo");
        assert_eq!(
            lines[3],
            "  ~ Widget: base type changed, fields +1/-1, methods +1"
        );
    }

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }
}

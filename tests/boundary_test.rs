use api_semver::boundary::BoundaryWarning;
use api_semver::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unparsable_version_display() {
    let warning = BoundaryWarning::UnparsableVersion {
        raw: "1.x".to_string(),
        reason: "unexpected character".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("1.x"),
        "Message should contain the raw entry, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("unexpected character"),
        "Message should contain the reason, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_tag_mismatch_pattern_display() {
    let warning = BoundaryWarning::TagMismatchPattern {
        tag: "latest".to_string(),
        pattern: "v{version}".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "Tag 'latest' does not match pattern 'v{version}'"
    );
}

#[test]
fn test_boundary_warning_missing_previous_artifact_display() {
    let warning = BoundaryWarning::MissingPreviousArtifact {
        path: "dist/previous.toml".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("dist/previous.toml"));
    assert!(
        display_msg.contains("breaking change"),
        "Message should explain the consequence, got: {}",
        display_msg
    );
}

#[test]
fn test_display_boundary_warning() {
    // Output goes to stderr; this only checks it does not panic
    ui::display_boundary_warning(&BoundaryWarning::MissingPreviousArtifact {
        path: "previous.toml".to_string(),
    });
}

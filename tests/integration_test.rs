// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PREVIOUS_MANIFEST: &str = r#"
version = "1.0.0"

[[types]]
name = "Acme.Widget"
base_type = "System.Object"
methods = ["void Dispose()"]

[[types]]
name = "Acme.Gadget"
fields = ["int Count"]
"#;

const CURRENT_MANIFEST: &str = r#"
[[types]]
name = "Acme.Widget"
base_type = "System.Object"
methods = ["void Dispose()", "void Reset()"]
"#;

/// Run the binary inside `dir` against an empty config file
fn api_semver(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("empty-config.toml");
    fs::write(&config, "").expect("Could not write config");

    Command::new(env!("CARGO_BIN_EXE_api-semver"))
        .current_dir(dir)
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_api_semver_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_api-semver"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("api-semver"));
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("breaking"));
    assert!(stdout.contains("feature"));
}

#[test]
fn test_analyze_removed_type() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("previous.toml"), PREVIOUS_MANIFEST).unwrap();
    fs::write(dir.path().join("current.toml"), CURRENT_MANIFEST).unwrap();

    let output = api_semver(
        dir.path(),
        &[
            "--quiet",
            "analyze",
            "--previous",
            "previous.toml",
            "--current",
            "current.toml",
            "--history",
            "1.0.1-alpha",
        ],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "2.0.0-alpha");
}

#[test]
fn test_analyze_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("previous.toml"), PREVIOUS_MANIFEST).unwrap();
    fs::write(dir.path().join("current.toml"), CURRENT_MANIFEST).unwrap();

    let output = api_semver(
        dir.path(),
        &[
            "analyze",
            "--previous",
            "previous.toml",
            "--current",
            "current.toml",
            "--history",
            "1.0.0",
        ],
    );

    assert!(output.status.success());
    let report = stdout(&output);
    assert!(report.contains("2.0.0-alpha"));
    assert!(report.contains("Major"));
    assert!(report.contains("Acme.Gadget"));
}

#[test]
fn test_analyze_malformed_manifest_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("previous.toml"), PREVIOUS_MANIFEST).unwrap();
    fs::write(dir.path().join("current.toml"), "[[types]\nname =").unwrap();

    let output = api_semver(
        dir.path(),
        &["analyze", "--previous", "previous.toml", "--current", "current.toml"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Artifact load failed"));
}

#[test]
fn test_feature_release_from_history_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("history.txt"), "# released\n1.0.0\n1.0.1\n").unwrap();

    let output = api_semver(
        dir.path(),
        &["-q", "feature", "--history-file", "history.txt", "--prerelease="],
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1.1.0");
}

#[test]
fn test_breaking_reports_unparsable_history() {
    let dir = TempDir::new().unwrap();

    let output = api_semver(
        dir.path(),
        &["breaking", "--history", "1.0.0", "--history", "1.x"],
    );

    assert!(output.status.success());
    assert!(stdout(&output).contains("2.0.0-alpha"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ignoring history entry '1.x'"));
}

#[test]
fn test_breaking_without_history_fails() {
    let dir = TempDir::new().unwrap();

    let output = api_semver(dir.path(), &["breaking", "--history", "not-a-version"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Insufficient version history"));
}

#[test]
fn test_breaking_overflow_fails() {
    let dir = TempDir::new().unwrap();

    let output = api_semver(dir.path(), &["breaking", "--history", "18446744073709551615.0.0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Version overflow"));
}

#[test]
fn test_invalid_prerelease_label_fails() {
    let dir = TempDir::new().unwrap();

    let output = api_semver(
        dir.path(),
        &["feature", "--history", "1.0.0", "--prerelease", "not valid"],
    );

    assert_eq!(output.status.code(), Some(1));
}

#[cfg(test)]
mod git_tag_tests {
    use super::*;
    use git2::Repository;

    // Helper function to setup a temporary git repo with lightweight tags
    fn setup_tagged_repo(tags: &[&str]) -> TempDir {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

        let signature = git2::Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let commit_id = repo
            .commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])
            .unwrap();
        let commit = repo.find_object(commit_id, None).unwrap();

        for tag in tags {
            repo.tag_lightweight(tag, &commit, false).unwrap();
        }

        temp_dir
    }

    #[test]
    fn test_breaking_from_git_tags() {
        let repo_dir = setup_tagged_repo(&["v1.0.0", "v1.2.0", "v2.0.0-beta", "nightly"]);

        let output = api_semver(repo_dir.path(), &["-q", "breaking", "--git-tags"]);

        assert!(output.status.success());
        assert_eq!(stdout(&output).trim(), "2.0.1-beta");
    }

    #[test]
    fn test_git_tags_report_mismatched_tags() {
        let repo_dir = setup_tagged_repo(&["v1.0.0", "nightly"]);
        let work_dir = TempDir::new().unwrap();
        let repo_path = repo_dir.path().to_str().unwrap();

        let output = api_semver(
            work_dir.path(),
            &["feature", "--git-tags", repo_path, "--build", "ci.42"],
        );

        assert!(output.status.success());
        assert!(stdout(&output).contains("1.1.0-alpha+ci.42"));
        assert!(String::from_utf8_lossy(&output.stderr).contains("nightly"));
    }
}

//! End-to-end tests for the `alps-breakdown` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DOC: &str = "## Section 6: Features\n\n### 6.1 Signup\nUser can sign up.\n\n### 6.2 Login\nUser can log in.\n";

#[allow(deprecated)]
fn alps_cmd() -> Command {
    let mut cmd = Command::cargo_bin("alps-breakdown").unwrap();
    cmd.env_remove("ALPS_BREAKDOWN_OUTPUT");
    cmd.env_remove("ALPS_BREAKDOWN_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn temp_doc(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("doc.md"), content).unwrap();
    dir
}

#[test]
fn test_process_writes_default_yaml() {
    let dir = temp_doc(DOC);

    alps_cmd()
        .current_dir(&dir)
        .args(["process", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ Complete! Output saved to: tasks.yaml\nFeatures processed: 2\nTasks generated: 2\n",
        ));

    let yaml = std::fs::read_to_string(dir.path().join("tasks.yaml")).unwrap();
    assert!(yaml.contains("name: \"Implement Signup\""));
    assert!(yaml.contains("name: \"Implement Login\""));
}

#[test]
fn test_process_json_with_custom_output() {
    let dir = temp_doc(DOC);

    alps_cmd()
        .current_dir(&dir)
        .args(["process", "doc.md", "--format", "JSON", "-o", "out.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output saved to: out.json"));

    let text = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["total_features"], 2);
    assert_eq!(value["total_tasks"], 2);
    assert_eq!(value["features"][0]["id"], "F1");
    assert_eq!(value["features"][1]["tasks"][0]["id"], "T2.1");
    assert_eq!(value["features"][1]["tasks"][0]["status"], "Not Started");
}

#[test]
fn test_format_from_environment() {
    let dir = temp_doc(DOC);

    alps_cmd()
        .current_dir(&dir)
        .env("ALPS_BREAKDOWN_FORMAT", "json")
        .env("ALPS_BREAKDOWN_OUTPUT", "env.json")
        .args(["process", "doc.md"])
        .assert()
        .success();

    let text = std::fs::read_to_string(dir.path().join("env.json")).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
}

#[test]
fn test_process_verbose_prints_progress() {
    let dir = temp_doc(DOC);

    alps_cmd()
        .current_dir(&dir)
        .args(["process", "doc.md", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Processing: doc.md\nExtracting Section 6...\nAnalyzing features...\nGenerating output...\n✓ Complete!",
        ));
}

#[test]
fn test_process_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    alps_cmd()
        .current_dir(&dir)
        .args(["process", "nonexistent.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: failed to read nonexistent.md"));

    assert!(!dir.path().join("tasks.yaml").exists());
}

#[test]
fn test_process_missing_section_fails() {
    let dir = temp_doc("## Section 5\nno features here\n");

    alps_cmd()
        .current_dir(&dir)
        .args(["process", "doc.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: section 6 not found"));

    assert!(!dir.path().join("tasks.yaml").exists());
}

#[test]
fn test_process_requires_file_path() {
    alps_cmd().arg("process").assert().code(1).stderr(predicate::str::contains("<FILE_PATH>"));
}

#[test]
fn test_unknown_subcommand_fails() {
    alps_cmd()
        .arg("explode")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("explode"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_no_arguments_prints_usage() {
    alps_cmd().assert().code(1).stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help() {
    for args in [vec!["help"], vec!["--help"], vec!["-h"]] {
        alps_cmd()
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::contains("process"));
    }
}

#[test]
fn test_version() {
    let expected = format!("alps-breakdown {}\n", env!("CARGO_PKG_VERSION"));
    for arg in ["version", "--version"] {
        alps_cmd()
            .arg(arg)
            .assert()
            .success()
            .stdout(predicate::str::diff(expected.clone()));
    }
}

#[test]
fn test_validate_clean_section() {
    let dir = temp_doc(DOC);

    alps_cmd()
        .current_dir(&dir)
        .args(["validate", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Section 6 is valid (2 features)"));
}

#[test]
fn test_validate_reports_issues() {
    let dir = temp_doc("## Section 6\n### 6.1 Signup\n");

    alps_cmd()
        .current_dir(&dir)
        .args(["validate", "doc.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("  - feature F1 has empty content"));
}

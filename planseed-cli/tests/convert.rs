//! End-to-end tests for the planseed binary

use assert_cmd::Command;
use predicates::prelude::*;

const PLAN: &str = "\
### Feature: Login [P1]
- Notes: context here
- Task: Add form [P2]
  - Subtask: Validate email
- Task: Wire backend

### Feature: Search
- Task: Index documents [P1]
";

fn planseed(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("planseed").unwrap();
    // Keep the host's config and env out of the test
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("PLANSEED_DEFAULT_PRIORITY")
        .env_remove("PLANSEED_TRACKER_BIN");
    cmd
}

#[test]
fn convert_writes_jsonl_file() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    let out = dir.path().join("issues.jsonl");
    std::fs::write(&plan, PLAN).unwrap();

    planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);

    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["source"], "PLAN.md");
    }

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["title"], "Login");
    assert_eq!(first["type"], "feature");
    assert_eq!(first["priority"], 1);
    assert_eq!(first["description"], "context here");

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["description"], "Parent: Login");
}

#[test]
fn convert_writes_to_stdout_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, "### Feature: X\n").unwrap();

    planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\":\"X\""));
}

#[test]
fn convert_commands_format_uses_tracker_bin() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, "### Feature: Login [P1]\n").unwrap();

    planseed(dir.path())
        .args(["convert", "--format", "commands", "-f"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bd create 'Login' -p 1 -t feature --json",
        ));
}

#[test]
fn convert_tracker_bin_flag_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, "### Feature: X\n").unwrap();

    planseed(dir.path())
        .args(["--tracker-bin", "beads", "convert", "--format", "commands", "-f"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("beads create"));
}

#[test]
fn convert_default_priority_flag_applies() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, "### Feature: X\n").unwrap();

    planseed(dir.path())
        .args(["--default-priority", "1", "convert", "-f"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"priority\":1"));
}

#[test]
fn orphan_task_exits_nonzero_but_writes_valid_records() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    let out = dir.path().join("issues.jsonl");
    std::fs::write(&plan, "- Task: Orphan\n### Feature: X\n").unwrap();

    planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1: missing ancestor"));

    // The valid Feature record is still written
    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 1);
    let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(value["title"], "X");
}

#[test]
fn invalid_priority_reported_with_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, "### Feature: X [P9]\n").unwrap();

    planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1: invalid priority"));
}

#[test]
fn prose_only_plan_exits_zero_with_no_records() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, "# Title\n\njust prose\n").unwrap();

    planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_plan_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    planseed(dir.path())
        .args(["convert", "-f"])
        .arg(dir.path().join("nope.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read plan file"));
}

#[test]
fn check_prints_structure() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, PLAN).unwrap();

    planseed(dir.path())
        .args(["check", "-f"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("6 item(s), 0 error(s)"))
        .stdout(predicate::str::contains("feature [P1] Login"))
        .stdout(predicate::str::contains("  task [P2] Add form"));
}

#[test]
fn rerun_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("PLAN.md");
    std::fs::write(&plan, PLAN).unwrap();

    let first = planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .output()
        .unwrap();
    let second = planseed(dir.path())
        .args(["convert", "-f"])
        .arg(&plan)
        .output()
        .unwrap();

    assert_eq!(first.stdout, second.stdout);
}

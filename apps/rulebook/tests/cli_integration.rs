use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, content).unwrap();
}

fn seed_pack(root: &Path) {
    write(root, "rule_sets/light-spec/01-core/01-style.md", "style\n");
    write(root, "rule_sets/heavy-spec/01-core/01-style.md", "heavy\n");
    write(root, "memory_starters/architecture.md", "starter\n");
    write(root, "tool_starters/fetch.sh", "#!/bin/sh\n");
}

fn rulebook(pack: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rulebook").unwrap();
    cmd.env("RULEBOOK_HOME", pack);
    cmd
}

#[test]
fn sync_without_install_fails_with_guidance() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());
    let target = TempDir::new().unwrap();

    rulebook(pack.path())
        .args(["sync", "--project-dir"])
        .arg(target.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project rules directory not found"));

    assert!(!target.path().join(".windsurfrules").exists());
}

#[test]
fn install_then_sync_round_trip() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());
    let target = TempDir::new().unwrap();

    rulebook(pack.path())
        .args(["install", "--project-dir"])
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"));

    assert!(target.path().join("project_rules/01-core/01-style.md").is_file());
    assert!(target.path().join(".cursor/rules/01-style.mdc").is_file());
    assert!(target.path().join("memory/architecture.md").is_file());

    // Edit the source of truth; sync picks it up.
    write(target.path(), "project_rules/01-core/02-extra.md", "extra\n");
    rulebook(pack.path())
        .args(["sync", "--project-dir"])
        .arg(target.path())
        .assert()
        .success();
    assert!(target.path().join(".cursor/rules/02-extra.mdc").is_file());
}

#[test]
fn install_unknown_rule_set_lists_available() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());
    let target = TempDir::new().unwrap();

    rulebook(pack.path())
        .args(["install", "--rule-set", "no-such-set", "--project-dir"])
        .arg(target.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Available rule sets"))
        .stderr(predicate::str::contains("light-spec"));
}

#[test]
fn clean_all_refuses_non_interactive_without_yes() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());
    let target = TempDir::new().unwrap();

    rulebook(pack.path())
        .args(["install", "--project-dir"])
        .arg(target.path())
        .assert()
        .success();

    // Piped stdin is not a terminal.
    rulebook(pack.path())
        .args(["clean-all", "--project-dir"])
        .arg(target.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
    assert!(target.path().join("memory").exists());
}

#[test]
fn clean_all_with_yes_removes_managed_files() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());
    let target = TempDir::new().unwrap();

    rulebook(pack.path())
        .args(["install", "--project-dir"])
        .arg(target.path())
        .assert()
        .success();

    rulebook(pack.path())
        .args(["clean-all", "--yes", "--project-dir"])
        .arg(target.path())
        .assert()
        .success();

    assert!(!target.path().join("project_rules").exists());
    assert!(!target.path().join("memory").exists());
    assert!(!target.path().join(".windsurfrules").exists());
}

#[test]
fn clean_rules_keeps_user_owned_directories() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());
    let target = TempDir::new().unwrap();

    rulebook(pack.path())
        .args(["install", "--project-dir"])
        .arg(target.path())
        .assert()
        .success();

    rulebook(pack.path())
        .args(["clean-rules", "--project-dir"])
        .arg(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("left untouched"));

    assert!(!target.path().join("project_rules").exists());
    assert!(target.path().join("memory/architecture.md").is_file());
    assert!(target.path().join("tools/fetch.sh").is_file());
}

#[test]
fn verbose_flag_emits_debug_events() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());

    rulebook(pack.path())
        .env_remove("RUST_LOG")
        .args(["-vv", "list-rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using project directory"));
}

#[test]
fn list_rules_shows_pack_rule_sets() {
    let pack = TempDir::new().unwrap();
    seed_pack(pack.path());

    rulebook(pack.path())
        .arg("list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("heavy-spec"))
        .stdout(predicate::str::contains("light-spec"));
}

#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn handbook_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("handbook"));
    cmd.env_remove("HANDBOOK_HOME")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn test_list_shows_default_pages() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("General Handbook"))
        .stdout(predicate::str::contains("Training Host"));
}

#[test]
fn test_page_category_entry_workflow() {
    let dir = TempDir::new().unwrap();

    // 1. Page
    handbook_cmd(&dir)
        .args(["page", "add", "  Night Shift  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("night-shift"));
    assert!(dir.path().join("handbook-data.json").exists());

    // 2. Category
    handbook_cmd(&dir)
        .args(["category", "add", "night-shift", "Emergency Contacts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("night-shift-emergency-contacts"));

    // 3. Entry
    let output = handbook_cmd(&dir)
        .args([
            "entry",
            "add",
            "night-shift",
            "night-shift-emergency-contacts",
            "Fire Department",
            "Dial 911",
            "--info",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let entry_id = stdout.lines().next().unwrap().trim().to_string();
    assert!(entry_id.starts_with("night-shift-emergency-contacts-"));

    // 4. Show
    handbook_cmd(&dir)
        .args(["show", "night-shift"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emergency Contacts"))
        .stdout(predicate::str::contains("Fire Department"))
        .stdout(predicate::str::contains("Dial 911"));

    // Info entries never reach the clipboard
    handbook_cmd(&dir)
        .args([
            "entry",
            "copy",
            "night-shift",
            "night-shift-emergency-contacts",
            entry_id.as_str(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be copied"));
}

#[test]
fn test_empty_names_are_rejected() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["page", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));

    assert!(!dir.path().join("handbook-data.json").exists());
}

#[test]
fn test_show_unknown_page_fails() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["show", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found: ghost"));
}

#[test]
fn test_page_rm_can_be_cancelled() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["page", "rm", "training-host"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    handbook_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Training Host"));

    handbook_cmd(&dir)
        .args(["page", "rm", "training-host", "--yes"])
        .assert()
        .success();

    handbook_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Training Host").not());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["page", "add", "Night Shift"])
        .assert()
        .success();

    handbook_cmd(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset to default"));

    handbook_cmd(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Night Shift").not());
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["config", "confirm-destructive", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confirm-destructive set to false"));

    handbook_cmd(&dir)
        .args(["config", "confirm-destructive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    // No prompt once confirmation is off
    handbook_cmd(&dir)
        .args(["page", "rm", "training-host"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page deleted: training-host"));
}

#[test]
fn test_storage_key_switches_file() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["config", "storage-key", "night-desk"])
        .assert()
        .success();

    handbook_cmd(&dir)
        .args(["page", "add", "Lobby"])
        .assert()
        .success();

    assert!(dir.path().join("night-desk.json").exists());
    assert!(!dir.path().join("handbook-data.json").exists());
}

#[test]
fn test_storage_key_cannot_shadow_config_file() {
    let dir = TempDir::new().unwrap();

    handbook_cmd(&dir)
        .args(["config", "confirm-destructive", "false"])
        .assert()
        .success();

    handbook_cmd(&dir)
        .args(["config", "storage-key", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reserved for the config file"));

    handbook_cmd(&dir)
        .args(["page", "add", "Night Shift"])
        .assert()
        .success();

    // Settings survive and the document lands in its own file
    handbook_cmd(&dir)
        .args(["config", "confirm-destructive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
    assert!(dir.path().join("handbook-data.json").exists());
}

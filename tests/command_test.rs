mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stencil() -> Command {
    Command::cargo_bin("stencil").unwrap()
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    stencil()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    stencil()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn test_init_existing_directory_fails_with_nonzero_exit() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("taken")).unwrap();

    stencil()
        .current_dir(temp_dir.path())
        .args(["init", "taken"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("project creation failed!"));
}

#[test]
fn test_init_from_local_template_with_stdin_answers() {
    let temp_dir = TempDir::new().unwrap();
    let template = common::fixture_template(temp_dir.path());

    stencil()
        .current_dir(temp_dir.path())
        .args(["init", "my-service", "--template"])
        .arg(&template)
        .arg("--stdin")
        .write_stdin(r#"{"domain": "svc.example.org", "runtime": "python"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("project created successfully"));

    let project = temp_dir.path().join("my-service");
    assert!(project.join(".env").exists());
    assert!(project.join(".git/hooks/pre-push").exists());
    assert!(project.join("handler.py").exists());
    assert!(!project.join("handler.js").exists());

    let package = fs::read_to_string(project.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"my-service\""));

    let env = fs::read_to_string(project.join(".env")).unwrap();
    assert!(env.contains("DOMAIN='svc.example.org'"));
    assert!(env.contains("BASE_PATH='api'"));
}

#[test]
fn test_init_with_defaults_from_empty_stdin_object() {
    let temp_dir = TempDir::new().unwrap();
    let template = common::fixture_template(temp_dir.path());

    stencil()
        .current_dir(temp_dir.path())
        .args(["init", "defaults-service", "--template"])
        .arg(&template)
        .arg("--stdin")
        .write_stdin("{}")
        .assert()
        .success();

    let env =
        fs::read_to_string(temp_dir.path().join("defaults-service/.env")).unwrap();
    assert!(env.contains("DOMAIN='example.com'"));
    assert!(env.contains("BASE_PATH='api'"));
    assert!(env.contains("RUNTIME='nodejs10.x'"));
}

//! Integration tests for the sailpma binary.
//!
//! Each test runs the real binary in a temp directory laid out like a
//! Laravel project root, so the default relative paths resolve naturally.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const COMPOSE: &str = "services:\n    laravel.test:\n        build: .\n    mysql:\n        image: 'mysql/mysql-server:8.0'\nnetworks:\n    sail:\n        driver: bridge\n";

const TRAIT: &str = "<?php\n\ntrait InteractsWithDockerComposeServices\n{\n    protected $services = [\n        'mysql',\n        'redis',\n    ];\n}\n";

fn sailpma(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sailpma").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

/// Lay out a project root with a compose file.
fn project_with_compose() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let compose = tmp.path().join("docker-compose.yml");
    fs::write(&compose, COMPOSE).unwrap();
    (tmp, compose)
}

/// Lay out the vendor tree Sail ships: services trait + stubs directory.
fn project_with_vendor() -> (TempDir, PathBuf, PathBuf) {
    let (tmp, _compose) = project_with_compose();
    let concerns = tmp.path().join("vendor/laravel/sail/src/Console/Concerns");
    fs::create_dir_all(&concerns).unwrap();
    let trait_file = concerns.join("InteractsWithDockerComposeServices.php");
    fs::write(&trait_file, TRAIT).unwrap();
    let stubs = tmp.path().join("vendor/laravel/sail/stubs");
    fs::create_dir_all(&stubs).unwrap();
    (tmp, trait_file, stubs.join("phpmyadmin.stub"))
}

// ── inject ────────────────────────────────────────────────────────────────────

#[test]
fn inject_places_block_before_networks_and_writes_backup() {
    let (tmp, compose) = project_with_compose();

    sailpma(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("injected into"));

    let patched = fs::read_to_string(&compose).unwrap();
    let block_at = patched.find("    phpmyadmin:").unwrap();
    let networks_at = patched.find("\nnetworks:").unwrap();
    assert!(block_at < networks_at);
    assert!(patched.contains("        image: 'phpmyadmin:5.2.1'"));
    assert!(patched.contains("\"8080:80\""));

    let backup = fs::read_to_string(tmp.path().join("docker-compose.backup")).unwrap();
    assert_eq!(backup, COMPOSE);
}

#[test]
fn inject_honours_version_and_port_overrides() {
    let (tmp, compose) = project_with_compose();

    sailpma(tmp.path())
        .args(["--version=5.2.2", "--port=9090"])
        .assert()
        .success();

    let patched = fs::read_to_string(&compose).unwrap();
    assert!(patched.contains("image: 'phpmyadmin:5.2.2'"));
    assert!(patched.contains("\"9090:80\""));
}

#[test]
fn inject_twice_duplicates_the_block() {
    // Documented behavior: no existing-entry check, so a second run
    // duplicates the service definition.
    let (tmp, compose) = project_with_compose();

    sailpma(tmp.path()).assert().success();
    sailpma(tmp.path()).assert().success();

    let patched = fs::read_to_string(&compose).unwrap();
    assert_eq!(patched.matches("    phpmyadmin:\n").count(), 2);
}

#[test]
fn inject_without_anchor_fails_and_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let compose = tmp.path().join("docker-compose.yml");
    fs::write(&compose, "services:\n    mysql:\n").unwrap();

    sailpma(tmp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("networks:"));

    assert_eq!(fs::read_to_string(&compose).unwrap(), "services:\n    mysql:\n");
    assert!(!tmp.path().join("docker-compose.backup").exists());
}

#[test]
fn inject_missing_compose_file_fails() {
    let tmp = TempDir::new().unwrap();

    sailpma(tmp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn inject_accepts_compose_file_override() {
    let tmp = TempDir::new().unwrap();
    let compose = tmp.path().join("compose/dev.yml");
    fs::create_dir_all(compose.parent().unwrap()).unwrap();
    fs::write(&compose, COMPOSE).unwrap();

    sailpma(tmp.path())
        .args(["--compose-file", compose.to_str().unwrap()])
        .assert()
        .success();

    assert!(fs::read_to_string(&compose).unwrap().contains("phpmyadmin:"));
}

// ── add ───────────────────────────────────────────────────────────────────────

#[test]
fn add_registers_service_and_publishes_stub() {
    let (tmp, trait_file, stub) = project_with_vendor();

    sailpma(tmp.path())
        .args(["--add", "--version=5.2.2", "--port=9090"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added to Sail's service list"));

    let patched = fs::read_to_string(&trait_file).unwrap();
    let entry_at = patched.find("\t\t'phpmyadmin',").unwrap();
    let close_at = patched.find("    ];").unwrap();
    assert!(entry_at < close_at);

    let stub_content = fs::read_to_string(&stub).unwrap();
    assert!(stub_content.starts_with("phpmyadmin:"));
    assert!(stub_content.contains("image: 'phpmyadmin:5.2.2'"));
    assert!(stub_content.contains("\"9090:80\""));
    // Stub is the unindented form.
    assert!(!stub_content.starts_with("    "));

    let backup = trait_file.with_extension("backup");
    assert_eq!(fs::read_to_string(&backup).unwrap(), TRAIT);
}

// ── restore ───────────────────────────────────────────────────────────────────

#[test]
fn restore_after_inject_reproduces_original_bytes() {
    let (tmp, compose) = project_with_compose();

    sailpma(tmp.path()).assert().success();
    sailpma(tmp.path())
        .arg("--restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("restored from backup"));

    assert_eq!(fs::read_to_string(&compose).unwrap(), COMPOSE);
}

#[test]
fn restore_after_add_restores_trait_and_removes_stub() {
    let (tmp, trait_file, stub) = project_with_vendor();

    sailpma(tmp.path()).arg("--add").assert().success();
    assert!(stub.exists());

    sailpma(tmp.path()).arg("--restore").assert().success();

    assert_eq!(fs::read_to_string(&trait_file).unwrap(), TRAIT);
    assert!(!stub.exists());
}

#[test]
fn restore_takes_precedence_over_add() {
    let (tmp, compose) = project_with_compose();

    sailpma(tmp.path()).assert().success();
    sailpma(tmp.path())
        .args(["--restore", "--add"])
        .assert()
        .success();

    // The restore ran, not the add.
    assert_eq!(fs::read_to_string(&compose).unwrap(), COMPOSE);
}

#[test]
fn restore_without_backup_fails_and_keeps_target() {
    let (tmp, compose) = project_with_compose();

    sailpma(tmp.path())
        .arg("--restore")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no backup found"));

    assert_eq!(fs::read_to_string(&compose).unwrap(), COMPOSE);
}

// ── surface ───────────────────────────────────────────────────────────────────

#[test]
fn help_describes_the_flags() {
    Command::cargo_bin("sailpma")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--version"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--add"))
        .stdout(predicate::str::contains("--restore"));
}

#[test]
fn no_color_env_with_arbitrary_value_is_accepted() {
    // no-color.org: presence of NO_COLOR disables colour, whatever the
    // value — it must never be rejected as a malformed argument.
    let (tmp, _compose) = project_with_compose();

    let mut cmd = Command::cargo_bin("sailpma").unwrap();
    cmd.current_dir(tmp.path())
        .env("NO_COLOR", "yes please")
        .assert()
        .success()
        .stdout(predicate::str::contains("injected into"));
}

#[test]
fn quiet_suppresses_success_output() {
    let (tmp, _compose) = project_with_compose();

    sailpma(tmp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

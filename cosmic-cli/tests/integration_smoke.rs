//! Smoke tests for cosmicctl command wiring

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// cosmicctl isolated from the caller's home, config and .env
fn cosmicctl(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cosmicctl").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("COSMIC_CONFIG")
        .env_remove("DATABASE_URL")
        .env_remove("PORT")
        .env_remove("ADMIN_USER")
        .env_remove("ADMIN_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    cosmicctl(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("admin"));
}

#[test]
fn test_serve_help() {
    let dir = TempDir::new().unwrap();
    cosmicctl(dir.path())
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--static-dir"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_config_path_uses_flag() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("site.toml");
    cosmicctl(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("site.toml"))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_config_show_redacts_password() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("site.toml");
    std::fs::write(
        &config,
        "[database]\nurl = \"sqlite://custom.db\"\n\n[admin]\npassword = \"s3cret-Phrase\"\n",
    )
    .unwrap();

    cosmicctl(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlite://custom.db"))
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("s3cret-Phrase").not());
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    cosmicctl(dir.path())
        .args(["--config", "does-not-exist.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_migrate_creates_database() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("data").join("astrology.db");
    let url = format!("sqlite://{}", db_path.display());

    cosmicctl(dir.path())
        .env("DATABASE_URL", &url)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(db_path.exists());

    // Second run leaves the seeded rows alone.
    cosmicctl(dir.path())
        .env("DATABASE_URL", &url)
        .arg("migrate")
        .assert()
        .success();
}

#[test]
fn test_admin_set_password() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("astrology.db").display());

    cosmicctl(dir.path())
        .env("DATABASE_URL", &url)
        .args(["admin", "set-password", "N3w-Passw0rd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin password updated for 'admin'"));

    cosmicctl(dir.path())
        .env("DATABASE_URL", &url)
        .args(["admin", "set-password", ""])
        .assert()
        .failure();
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    cosmicctl(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cosmicctl"));
}

//! Integration tests for the `savor` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `savor` binary with env isolation.
///
/// Clears all `SAVOR_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn savor_cmd() -> assert_cmd::Command {
    savor_cmd_in(std::path::Path::new("/tmp/savor-cli-test-nonexistent"))
}

/// Like [`savor_cmd`], but with config directories rooted at `home` so
/// tests can observe what `config set` and friends write to disk.
fn savor_cmd_in(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("savor");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("SAVOR_PROFILE")
        .env_remove("SAVOR_SERVER")
        .env_remove("SAVOR_RESTAURANT")
        .env_remove("SAVOR_TOKEN")
        .env_remove("SAVOR_OUTPUT")
        .env_remove("SAVOR_INSECURE")
        .env_remove("SAVOR_TIMEOUT")
        .env_remove("SAVOR_EMAIL")
        .env_remove("SAVOR_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = savor_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    savor_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Savor")
            .and(predicate::str::contains("vouchers"))
            .and(predicate::str::contains("foods"))
            .and(predicate::str::contains("orders")),
    );
}

#[test]
fn test_version_flag() {
    savor_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("savor"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    savor_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    savor_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    savor_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = savor_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_vouchers_list_no_backend() {
    savor_cmd()
        .args(["vouchers", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("server"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    savor_cmd().args(["config", "show"]).assert().success();
}

// ── Config persistence ──────────────────────────────────────────────

#[test]
fn test_config_set_persists_and_shows() {
    let home = tempfile::tempdir().unwrap();

    savor_cmd_in(home.path())
        .args(["config", "set", "server", "https://api.savor.test"])
        .assert()
        .success();

    savor_cmd_in(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.savor.test"));
}

#[test]
fn test_config_use_rejects_unknown_profile() {
    let home = tempfile::tempdir().unwrap();

    savor_cmd_in(home.path())
        .args(["config", "set", "server", "https://api.savor.test"])
        .assert()
        .success();

    let output = savor_cmd_in(home.path())
        .args(["config", "use", "staging"])
        .output()
        .unwrap();
    assert!(!output.status.success(), "Expected unknown profile to fail");
    let text = combined_output(&output);
    assert!(
        text.contains("staging"),
        "Expected error naming the missing profile:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = savor_cmd()
        .args(["--output", "invalid", "vouchers", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing backend config, not about argument parsing.
    savor_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "vouchers",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("server"))
                .or(predicate::str::contains("profile")),
        );
}

// ── Voucher form validation (no backend needed for parse errors) ────

#[test]
fn test_voucher_create_requires_flags() {
    let output = savor_cmd().args(["vouchers", "create"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage error");
    let text = combined_output(&output);
    assert!(
        text.contains("--code") || text.contains("required"),
        "Expected missing-argument error:\n{text}"
    );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_vouchers_subcommands_exist() {
    savor_cmd()
        .args(["vouchers", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_foods_subcommands_exist() {
    savor_cmd()
        .args(["foods", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("enable"))
                .and(predicate::str::contains("disable")),
        );
}

#[test]
fn test_orders_subcommands_exist() {
    savor_cmd()
        .args(["orders", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("set-status")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    savor_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles")),
        );
}

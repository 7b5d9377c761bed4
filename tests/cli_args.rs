//! Tests for CLI argument parsing against the built binary.

use std::process::{Command, Stdio};
use tempfile::TempDir;

fn site_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nomad-site"))
}

#[test]
fn test_help_lists_options() {
    let output = site_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--page"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_piped_stdout_exits_cleanly() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = site_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("--page")
        .arg("pricing")
        .stdout(Stdio::piped())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_log_file_records_non_terminal_notice() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log = temp_dir.path().join("site.log");
    let output = site_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("--log-file")
        .arg(&log)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let contents = std::fs::read_to_string(&log).expect("log written");
    assert!(contents.contains("not a terminal"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[display]\ntick_rate_ms = 1\n").expect("write config");
    let output = site_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

//! End-to-end tests for the `nullref` binary.
//!
//! Exit statuses, where the report lands, and the `--json` stdout contract.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Config that only lets ERROR events through, so the report is the first
/// thing on stderr.
fn quiet_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("report.toml");
    fs::write(
        &path,
        r#"[shared]
log_level = "error"
service_name = "nullref-test"
"#,
    )
    .unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nullref"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn nullref")
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

#[test]
fn default_raise_exits_1_with_report_on_stderr() {
    let dir = TempDir::new().unwrap();
    let config = quiet_config(&dir);
    let out = run(&["--config", config.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("NullReferenceError: 哇哦！"));
    assert!(out.stdout.is_empty());
}

#[test]
fn default_config_still_reports_and_exits_1() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("NullReferenceError: 哇哦！"));
}

#[test]
fn missing_config_exits_2() {
    let out = run(&["--config", "/nonexistent.toml"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("FATAL"));
    assert!(!stderr(&out).contains("NullReferenceError"));
}

#[test]
fn empty_message_renders_bare_headline() {
    let dir = TempDir::new().unwrap();
    let config = quiet_config(&dir);
    let out = run(&["--config", config.to_str().unwrap(), "-m", ""]);

    assert_eq!(out.status.code(), Some(1));
    let text = stderr(&out);
    assert_eq!(text.lines().next(), Some("NullReferenceError"));
    assert!(text.lines().nth(1).unwrap().starts_with("    at "));
}

#[test]
fn cause_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = quiet_config(&dir);
    let out = run(&[
        "--config",
        config.to_str().unwrap(),
        "-m",
        "ptr was null",
        "--cause",
        "socket closed",
    ]);

    assert_eq!(out.status.code(), Some(1));
    let text = stderr(&out);
    assert!(text.starts_with("NullReferenceError: ptr was null\n"));
    assert!(text.contains("Caused by: socket closed"));
}

#[test]
fn json_stdout_is_single_snapshot() {
    let out = run(&["--json", "--synthesized", "--cause", "upstream"]);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(snapshot["error_type"], "NullReferenceError");
    assert!(snapshot["site"].is_null());
    assert_eq!(snapshot["causes"], serde_json::json!(["upstream"]));
}

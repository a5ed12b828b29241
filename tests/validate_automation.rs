use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use finder_bot_check::config::AutomationConfig;

fn run_validator(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_validate_automation"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_config(dir: &Path, content: &str) -> String {
    let path = dir.join("automation.json");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_valid_file_passes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"autonomousFinder":{"enabled":true,"checkIntervalMinutes":15,
            "channelUrls":["https://www.youtube.com/@a","https://www.youtube.com/@b"]}}"#,
    );

    let output = run_validator(dir.path(), &["--file", &path, "--verbose"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("Configuration is valid (2 channel(s))"));
    assert!(stdout.contains("[1] https://www.youtube.com/@b"));
}

#[test]
fn test_zero_interval_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"autonomousFinder":{"enabled":true,"checkIntervalMinutes":0,
            "channelUrls":["https://www.youtube.com/@a"]}}"#,
    );

    let output = run_validator(dir.path(), &["--file", &path]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Check interval must be greater than 0"));
    assert!(stdout.contains("Validation failed: 1 error(s)"));
}

#[test]
fn test_every_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"{"autonomousFinder":{"enabled":true,"checkIntervalMinutes":0,
            "channelUrls":["https://www.youtube.com/@a","https://www.youtube.com/@a"]}}"#,
    );

    let output = run_validator(dir.path(), &["--file", &path]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Duplicate channel URL found: https://www.youtube.com/@a"));
    assert!(stdout.contains("Validation failed: 2 error(s)"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let output = run_validator(dir.path(), &["--file", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}

#[test]
fn test_generate_example_writes_valid_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("example.json");

    let output = run_validator(
        dir.path(),
        &["--generate-example", target.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    let written = AutomationConfig::load_from_file(&target).unwrap();
    assert_eq!(written, AutomationConfig::example());
    assert!(written.validate_all().is_empty());
}

//! End-to-end tests for `bmi-calc config` commands.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the bmi-calc binary
fn bmi_calc_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bmi-calc")
}

/// Runs the binary with an isolated config directory.
fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(bmi_calc_bin())
        .env("BMI_CALC_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn show_json(config_dir: &Path) -> serde_json::Value {
    let output = run_isolated(&["config", "show", "--json"], config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "config show should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

#[test]
fn test_config_show_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = show_json(temp_dir.path());
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_key_hints"], true);
    assert!(result["path"].as_str().unwrap().ends_with("config.toml"));
}

#[test]
fn test_config_show_plain() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_isolated(&["config", "show"], temp_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Theme Mode: auto"));
}

#[test]
fn test_config_set_theme_light() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_isolated(&["config", "set", "--theme", "light"], temp_dir.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "Setting theme should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(temp_dir.path().join("config.toml").exists());

    let result = show_json(temp_dir.path());
    assert_eq!(result["ui"]["theme"], "light");
}

#[test]
fn test_config_set_key_hints() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_isolated(&["config", "set", "--key-hints", "false"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let result = show_json(temp_dir.path());
    assert_eq!(result["ui"]["show_key_hints"], false);
    // Untouched settings keep their defaults
    assert_eq!(result["ui"]["theme"], "auto");
}

#[test]
fn test_config_set_invalid_theme() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_isolated(&["config", "set", "--theme", "sepia"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_isolated(&["config", "set"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one configuration option"));
}

#[test]
fn test_config_path_uses_override() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_isolated(&["config", "path"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = temp_dir.path().join("config.toml");
    assert_eq!(stdout.trim(), expected.to_string_lossy());
}

#[test]
fn test_config_malformed_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("config.toml"), "[ui\n").unwrap();

    let output = run_isolated(&["config", "show"], temp_dir.path());
    assert_eq!(output.status.code(), Some(2));
}

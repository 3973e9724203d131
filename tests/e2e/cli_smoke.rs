//! CLI E2E smoke tests.

use serde_json::Value;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_outcome"))
        .args(args)
        .env_remove("OUTCOME_LOG_LEVEL")
        .env_remove("OUTCOME_LOG_JSON")
        .env_remove("RUST_LOG")
        .output()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../crates/config/tests/fixtures")
        .join(name)
}

#[test]
fn light_renders_known_and_unknown_colours() -> io::Result<()> {
    let output = run_cli(&["light", "red"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Stop! The light is red.\n");

    let output = run_cli(&["light", "Purple"])?;
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "'Purple' is not a traffic light colour.\n"
    );
    Ok(())
}

#[test]
fn person_success_and_failure_exit_codes() -> io::Result<()> {
    let output = run_cli(&["person", "--name", "Fred", "--age", "32"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Fred is 32\n");

    let output = run_cli(&["person", "--name", "Fred", "--age", "32", "--upper"])?;
    assert_eq!(stdout_of(&output), "FRED is 32\n");

    let output = run_cli(&["person", "--name", "", "--age", "ThirtyTwo"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_of(&output), "Please provide a name.\n");
    Ok(())
}

#[test]
fn person_echoes_age_text_as_typed() -> io::Result<()> {
    let output = run_cli(&["person", "--name", "Fred", "--age", "+32"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Fred is +32\n");

    let output = run_cli(&["person", "--name", "Fred", "--age", "+32", "--upper"])?;
    assert_eq!(stdout_of(&output), "FRED is +32\n");
    Ok(())
}

#[test]
fn person_failure_json_carries_envelope() -> io::Result<()> {
    let output = run_cli(&["--json", "person", "--name", "Fred", "--age", "150"])?;
    assert_eq!(output.status.code(), Some(2));

    let payload: Value = serde_json::from_str(&stdout_of(&output)).map_err(io::Error::other)?;
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["message"], "Age must be between 1 and 120.");
    assert_eq!(
        payload["error"]["message"],
        "provided age should be between 1-120: 150"
    );
    assert_eq!(payload["error"]["code"]["code"], "invalid_age_range");
    Ok(())
}

#[test]
fn mean_prints_quotient_or_no_values() -> io::Result<()> {
    assert_eq!(stdout_of(&run_cli(&["mean", "1", "2"])?), "1.5\n");
    assert_eq!(stdout_of(&run_cli(&["mean", "-3", "4"])?), "0.5\n");
    assert_eq!(stdout_of(&run_cli(&["mean"])?), "no values\n");
    Ok(())
}

#[test]
fn rename_requires_both_names() -> io::Result<()> {
    let output = run_cli(&["rename", "--name", "Fred", "--age", "32", "--new-name", "Barney"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Barney is 32\n");

    let output = run_cli(&["rename", "--name", "Fred", "--age", "32", "--new-name", ""])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn default_batch_projections() -> io::Result<()> {
    let output = run_cli(&["batch"])?;
    assert_eq!(
        stdout_of(&output),
        "Fred is 32\nPebbles is 1\nDino is 120\n"
    );

    let output = run_cli(&["--json", "batch", "--errors"])?;
    let payload: Value = serde_json::from_str(&stdout_of(&output)).map_err(io::Error::other)?;
    let kinds: Vec<&str> = payload["errors"]
        .as_array()
        .map(|errors| errors.iter().filter_map(|error| error["kind"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(
        kinds,
        vec!["emptyName", "invalidAgeValue", "invalidAgeRange", "invalidAgeRange"]
    );

    let output = run_cli(&["batch", "--strict"])?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_of(&output), "empty_name: provided name is empty\n");
    Ok(())
}

#[test]
fn batch_reads_people_from_config_file() -> io::Result<()> {
    let path = fixture("app.valid.json");
    let path = path.to_string_lossy();
    let output = run_cli(&["--config", &path, "batch"])?;
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Wilma is 29\n");
    Ok(())
}

#[test]
fn invalid_config_exits_with_invalid_input() -> io::Result<()> {
    let path = fixture("app.bad-version.json");
    let path = path.to_string_lossy();
    let output = run_cli(&["--config", &path, "info"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("config:unsupported_version"));
    Ok(())
}

#[test]
fn config_show_is_deterministic() -> io::Result<()> {
    let first = stdout_of(&run_cli(&["--json", "config", "show"])?);
    let second = stdout_of(&run_cli(&["--json", "config", "show"])?);
    assert_eq!(first, second);

    let payload: Value = serde_json::from_str(&first).map_err(io::Error::other)?;
    assert_eq!(payload["log"]["level"], "warn");
    assert_eq!(payload["batch"]["people"].as_array().map(Vec::len), Some(7));
    Ok(())
}

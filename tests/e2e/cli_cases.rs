//! End-to-end tests for the `fieldguard` binary.

use std::error::Error;
use std::path::PathBuf;
use std::process::{Command, Output};

const ENV_VARS: [&str; 4] = [
    "FIELDGUARD_DIAGNOSTICS_SINK",
    "FIELDGUARD_DIAGNOSTICS_FORMAT",
    "FIELDGUARD_LOG_LEVEL",
    "FIELDGUARD_LOG_FORMAT",
];

fn fieldguard(args: &[&str], env: &[(&str, &str)]) -> Result<Output, Box<dyn Error>> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fieldguard"));
    command.args(args).env_remove("RUST_LOG");
    for name in ENV_VARS {
        command.env_remove(name);
    }
    for (name, value) in env {
        command.env(name, value);
    }
    Ok(command.output()?)
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

fn config_fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("crates")
        .join("config")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn default_run_reports_violations_and_exits_zero() -> Result<(), Box<dyn Error>> {
    let output = fieldguard(&[], &[])?;

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    let [push_ok, push_fail, case1, construct_fail, case2, pop] = lines.as_slice() else {
        unreachable!("expected six stdout lines, got {lines:?}");
    };
    assert_eq!(
        push_ok,
        "Check success on MaximumInt (number1), value given: 3 checked against: 30"
    );
    assert_eq!(
        push_fail,
        "Check failed on MinimumInt (number2), value given: 30 checked against: 40"
    );
    assert!(case1.starts_with("case 1: checked push rejected"));
    assert_eq!(
        construct_fail,
        "Check failed on MaximumInt (number1), value given: 31 checked against: 30"
    );
    assert!(case2.starts_with("case 2: construction failed"));
    assert_eq!(pop, "store: empty");
    Ok(())
}

#[test]
fn strict_run_exits_two_on_first_violation() -> Result<(), Box<dyn Error>> {
    let output = fieldguard(&["--strict"], &[])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_lines(&output).len(), 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("domain:constraint_violation"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn json_diagnostics_come_from_env() -> Result<(), Box<dyn Error>> {
    let output = fieldguard(&[], &[("FIELDGUARD_DIAGNOSTICS_FORMAT", "json")])?;

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    let first = lines.first().ok_or("no stdout lines")?;
    let first: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(first["field"], "number1");
    assert_eq!(first["value"], 3);
    Ok(())
}

#[test]
fn silent_sink_leaves_only_case_lines() -> Result<(), Box<dyn Error>> {
    let path = config_fixture("fieldguard.valid.json");
    let path = path.to_string_lossy();
    let output = fieldguard(&["--config", path.as_ref()], &[])?;

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3, "unexpected stdout: {lines:?}");
    assert_eq!(lines.last().map(String::as_str), Some("store: empty"));
    Ok(())
}

#[test]
fn invalid_env_is_a_config_error() -> Result<(), Box<dyn Error>> {
    let output = fieldguard(&[], &[("FIELDGUARD_LOG_LEVEL", "verbose")])?;

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid_env_enum"), "stderr: {stderr}");
    Ok(())
}

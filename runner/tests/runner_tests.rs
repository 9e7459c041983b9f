use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const DOCUMENT: &str = r#"{
  "parameters": [
    { "name": "code", "value": "abc", "schema": { "type": "string", "maxLength": 4 } },
    { "name": "grade", "value": "A", "schema": { "type": "string" }, "enum": ["A", "B", "C"] },
    { "name": "page", "value": 3, "schema": { "type": "number", "format": "integer", "minimum": 1, "maximum": 10 } },
    { "name": "flag", "value": true, "schema": { "type": "boolean" } }
  ]
}"#;

const DEGENERATE: &str = r#"{
  "parameters": [
    { "name": "fixed", "value": 5.0, "schema": { "type": "number", "minimum": 5, "maximum": 5 } }
  ]
}"#;

fn run_runner(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tamper-runner"))
        .args(args)
        .output()
        .expect("run tamper-runner")
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn report(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("json report")
}

#[test]
fn reports_every_leaf() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(&dir, "params.json", DOCUMENT);

    let output = run_runner(&[&input, "--seed", "5", "--rounds", "2"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload = report(&output);
    assert_eq!(payload["seed"], 5);
    assert_eq!(payload["rounds"], 2);
    assert_eq!(payload["entries"].as_array().map(Vec::len), Some(8));
    assert_eq!(payload["summary"]["mutated"], 6);
    assert_eq!(payload["summary"]["skipped"]["not_mutable"], 2);
}

#[test]
fn mutated_values_violate_constraints() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(&dir, "params.json", DOCUMENT);

    let output = run_runner(&[&input, "--seed", "9"]);
    let payload = report(&output);
    let entries = payload["entries"].as_array().expect("entries");

    let code = entries[0]["value"].as_str().expect("code value");
    assert!(code.chars().count() > 4);

    let grade = entries[1]["value"].clone();
    assert!(!["A", "B", "C"].iter().any(|m| grade == *m));

    let page = entries[2]["value"].as_i64().expect("integer page");
    assert!(page < 1 || page > 10);
}

#[test]
fn same_seed_same_output() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(&dir, "params.json", DOCUMENT);

    let first = run_runner(&[&input, "--seed", "123", "--rounds", "3"]);
    let second = run_runner(&[&input, "--seed", "123", "--rounds", "3"]);

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn failures_only_change_exit_code_when_requested() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(&dir, "degenerate.json", DEGENERATE);

    let lenient = run_runner(&[&input]);
    let strict = run_runner(&[&input, "--fail-on-error"]);

    assert_eq!(lenient.status.code(), Some(0));
    assert_eq!(strict.status.code(), Some(2));
    let payload = report(&strict);
    assert_eq!(payload["entries"][0]["error"]["kind"], "degenerate_bounds");
    assert_eq!(payload["entries"][0]["value"], 5.0);
}

#[test]
fn legacy_config_is_applied() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(&dir, "params.json", DOCUMENT);
    let config = write(
        &dir,
        "config.json",
        r#"{ "numeric_strategy": "fallback_window", "exclude_enum_members": false }"#,
    );

    let output = run_runner(&[&input, "--config", &config, "--seed", "4"]);

    assert!(output.status.success());
    let payload = report(&output);
    let page = payload["entries"][2]["value"].as_f64().expect("page value");
    assert!((1.0..10.0).contains(&page));
    assert_eq!(
        payload["entries"][2]["outcome"]["direction"],
        "fallback_window"
    );
}

#[test]
fn invalid_config_exits_with_one() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(&dir, "params.json", DOCUMENT);
    let config = write(&dir, "config.json", r#"{ "enum_attempts": 0 }"#);

    let output = run_runner(&[&input, "--config", &config]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("enum_attempts"));
}

#[test]
fn missing_input_exits_with_one() {
    let dir = TempDir::new().expect("temp dir");
    let missing = path_str(&dir.path().join("absent.json"));

    let output = run_runner(&[&missing]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn inconsistent_document_exits_with_one() {
    let dir = TempDir::new().expect("temp dir");
    let input = write(
        &dir,
        "params.json",
        r#"{ "parameters": [ { "name": "code", "value": "x", "schema": { "type": "string", "minLength": 5, "maxLength": 2 } } ] }"#,
    );

    let output = run_runner(&[&input]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid parameter"));
}

//! End-to-end tests of the `pdtsp-compare` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const EXPECTED: &str = concat!(
    r#"{"cost": 10, "educate": true, "solution": [1,2,3], "#,
    r#""evolution": [{"time": 0.1, "best": 10}]}"#,
);

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("pdtsp-compare").unwrap()
}

fn write_result(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn compare_files(current: &PathBuf, expected: &PathBuf) -> assert_cmd::assert::Assert {
    cli()
        .env_remove("RUST_LOG")
        .arg("--current")
        .arg(current)
        .arg("--expected")
        .arg(expected)
        .assert()
}

#[test]
fn test_identical_file_matches_itself() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, "run.json", EXPECTED);

    compare_files(&file, &file).success().stdout(predicate::str::is_empty());
}

#[test]
fn test_time_insensitive() {
    let dir = TempDir::new().unwrap();
    let expected = write_result(&dir, "expected.json", EXPECTED);
    let current = write_result(
        &dir,
        "current.json",
        concat!(
            r#"{"cost": 10, "educate": true, "solution": [1,2,3], "#,
            r#""evolution": [{"time": 0.9, "best": 10}]}"#,
        ),
    );

    compare_files(&current, &expected).code(0).stdout(predicate::str::is_empty());
}

#[test]
fn test_extra_top_level_fields_ignored() {
    let dir = TempDir::new().unwrap();
    let expected = write_result(&dir, "expected.json", EXPECTED);
    let current = write_result(
        &dir,
        "current.json",
        concat!(
            r#"{"version": "2.0", "time": 42.5, "#,
            r#""cost": 10, "educate": true, "solution": [1,2,3], "#,
            r#""evolution": [{"time": 0.1, "best": 10}]}"#,
        ),
    );

    compare_files(&current, &expected).code(0);
    compare_files(&expected, &current).code(0);
}

#[test]
fn test_reversed_evolution_mismatches() {
    let dir = TempDir::new().unwrap();
    let forward = write_result(
        &dir,
        "forward.json",
        r#"{"cost": 8, "evolution": [{"time": 0.1, "best": 10}, {"time": 0.2, "best": 8}]}"#,
    );
    let reversed = write_result(
        &dir,
        "reversed.json",
        r#"{"cost": 8, "evolution": [{"time": 0.2, "best": 8}, {"time": 0.1, "best": 10}]}"#,
    );

    compare_files(&forward, &reversed).code(1);
    compare_files(&reversed, &forward).code(1);
}

#[test]
fn test_cost_mismatch_prints_current_verbatim() {
    let dir = TempDir::new().unwrap();
    let expected = write_result(&dir, "expected.json", EXPECTED);
    let current_text = concat!(
        "{\n",
        "  \"cost\": 11,\n",
        "  \"educate\": true,\n",
        "  \"solution\": [1,2,3],\n",
        "  \"evolution\": [{\"time\": 0.1, \"best\": 10}]\n",
        "}\n",
    );
    let current = write_result(&dir, "current.json", current_text);

    compare_files(&current, &expected)
        .code(1)
        .stdout(predicate::str::contains(current_text));
}

#[test]
fn test_missing_option_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let file = write_result(&dir, "run.json", EXPECTED);

    cli()
        .arg("--current")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--expected"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let expected = write_result(&dir, "expected.json", EXPECTED);
    let missing = dir.path().join("missing.json");

    compare_files(&missing, &expected)
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_invalid_json_is_error() {
    let dir = TempDir::new().unwrap();
    let expected = write_result(&dir, "expected.json", EXPECTED);
    let current = write_result(&dir, "current.json", "{\"cost\": 10,");

    compare_files(&current, &expected)
        .code(2)
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn test_malformed_evolution_is_error() {
    let dir = TempDir::new().unwrap();
    let expected = write_result(&dir, "expected.json", EXPECTED);
    let no_evolution = write_result(&dir, "no_evolution.json", r#"{"cost": 10}"#);
    let scalars_text = r#"{"cost": 10, "evolution": [0.1, 0.2]}"#;
    let scalar_entries = write_result(&dir, "scalars.json", scalars_text);

    compare_files(&no_evolution, &expected)
        .code(2)
        .stderr(predicate::str::contains("missing `evolution`"));
    compare_files(&expected, &scalar_entries)
        .code(2)
        .stderr(predicate::str::contains("entry 0 is not a JSON object"));
}

#[test]
fn test_large_costs_compare_exactly() {
    let dir = TempDir::new().unwrap();
    let float_cost = write_result(
        &dir,
        "float.json",
        r#"{"cost": 9007199254740992.0, "evolution": []}"#,
    );
    let int_cost = write_result(&dir, "int.json", r#"{"cost": 9007199254740993, "evolution": []}"#);
    let huge_a_text = r#"{"cost": 100000000000000000001, "evolution": []}"#;
    let huge_b_text = r#"{"cost": 100000000000000000000, "evolution": []}"#;
    let huge_a = write_result(&dir, "huge_a.json", huge_a_text);
    let huge_b = write_result(&dir, "huge_b.json", huge_b_text);

    compare_files(&int_cost, &float_cost).code(1);
    compare_files(&huge_a, &huge_b).code(1);
    compare_files(&huge_b, &huge_b).code(0);
}

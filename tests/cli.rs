use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("vowel-count").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn counts_vowels_in_line() {
    cmd()
        .write_stdin("Hello World\n")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn counts_uppercase_vowels() {
    cmd().write_stdin("AEIOU").assert().success().stdout("5\n");
}

#[test]
fn empty_line_prints_zero() {
    cmd().write_stdin("\n").assert().success().stdout("0\n");
}

#[test]
fn only_first_line_is_counted() {
    cmd()
        .write_stdin("bcdfg\naeiou\n")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn missing_input_fails_without_output() {
    cmd()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("no input line"));
}

#[test]
fn verbose_logs_stay_off_stdout() {
    cmd()
        .arg("--verbose")
        .write_stdin("programming\n")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn json_report() -> Result<()> {
    let out = cmd()
        .args(["--format", "json"])
        .write_stdin("Hello World\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(report["count"], 3);
    assert_eq!(report["characters"], 11);
    assert_eq!(report["scope"], "line");
    Ok(())
}

#[test]
fn first_word_scope() {
    cmd()
        .args(["--scope", "first-word"])
        .write_stdin("Hello World\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn settings_file_with_cli_override() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("vowel-count.toml");
    std::fs::write(&path, "[counter]\nscope = \"first-word\"\n\n[output]\nformat = \"json\"\n")?;
    let path = path.to_str().unwrap();

    cmd()
        .args(["--config", path, "--format", "plain"])
        .write_stdin("Sequoia trees\n")
        .assert()
        .success()
        .stdout("5\n");

    cmd()
        .args(["--config", path])
        .write_stdin("Sequoia trees\n")
        .assert()
        .success()
        .stdout(contains("\"scope\":\"first-word\""));
    Ok(())
}

#[test]
fn malformed_settings_file_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[counter\nscope = \"line\"\n")?;

    cmd()
        .args(["--config", path.to_str().unwrap()])
        .write_stdin("Hello\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("broken.toml"));
    Ok(())
}

#[test]
fn unknown_flag_value_is_usage_error() {
    cmd()
        .args(["--scope", "sentence"])
        .write_stdin("Hello\n")
        .assert()
        .failure()
        .code(2);
}

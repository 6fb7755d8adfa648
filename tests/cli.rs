// 命令行测试：参数、退出码、输出文件

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn graphcolor() -> Command {
    Command::cargo_bin("graphcolor").unwrap()
}

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("input.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn colours_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "1,2\n2,1,3\n3,2\n");
    let output = dir.path().join("output.txt");

    graphcolor().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "1,B\n2,A\n3,B\n");
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "1,2\n\n\n3,x\n");
    let output = dir.path().join("output.txt");

    graphcolor()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("第 4 行"));

    assert!(!output.exists());
}

#[test]
fn duplicate_node_reports_its_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "1,2\n\n\n1,3\n");
    let output = dir.path().join("output.txt");

    graphcolor()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("第 4 行"));

    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    graphcolor()
        .arg(dir.path().join("missing.txt"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "1,2\n");
    let output = dir.path().join("no-such-dir").join("output.txt");

    graphcolor().arg(&input).arg(&output).assert().failure();

    assert!(!output.exists());
}

#[test]
fn requires_exactly_two_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "1,2\n");

    graphcolor().assert().failure();
    graphcolor().arg(&input).assert().failure();
    graphcolor()
        .arg(&input)
        .arg(dir.path().join("a.txt"))
        .arg(dir.path().join("b.txt"))
        .assert()
        .failure();

    assert!(!dir.path().join("a.txt").exists());
}

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn sample_input() -> &'static str {
    "5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n2-3,4-5\n"
}

fn workdir_with_input(contents: &str) -> assert_fs::TempDir {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("input").write_str(contents).unwrap();
    dir
}

#[test]
fn part1_prints_fully_contained_count() {
    let dir = workdir_with_input(sample_input());

    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.current_dir(dir.path());

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "2\n");
}

#[test]
fn part2_prints_overlapping_count() {
    let dir = workdir_with_input(sample_input());

    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.current_dir(dir.path());

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout, "4\n");
}

#[test]
fn part1_accepts_crlf_input() {
    let dir = workdir_with_input("5-7,5-7\r\n2-3,7-9\r\n2-5,5-8\r\n2-8,5-8\r\n");

    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert().success().stdout("2\n");
}

#[test]
fn part1_same_count_on_every_run() {
    let dir = workdir_with_input(sample_input());

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("part1").unwrap();
        cmd.current_dir(dir.path());
        cmd.assert().success().stdout("2\n");
    }
}

#[test]
fn part1_fails_without_input_file() {
    let dir = assert_fs::TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to read input"));
}

#[test]
fn part1_fails_on_malformed_line() {
    let dir = workdir_with_input("2-8,3-7\n2-8 3-7\n");

    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Bad assignment on line 2"));
}

#[test]
fn part1_rejects_doubled_dash_without_color_codes() {
    let dir = workdir_with_input("2-8,3-7\n2--4,6-8\n");

    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Bad assignment on line 2"))
        .stderr(predicate::str::contains("\u{1b}").not());
}

// crates/extract_documentation/tests/cli_tests.rs

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn extract_documentation() -> Command {
    Command::cargo_bin("extract_documentation").unwrap()
}

#[test]
fn test_single_java_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("Adder.java");
    fs::write(
        &source,
        "/**\n * Adds things.\n */\nclass Adder {}\n",
    )
    .unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("1:1-3:4"))
        .stdout(predicate::str::contains(" Adds things."));
}

#[test]
fn test_single_python_file_with_docstring() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("module.py");
    fs::write(&source, "\"\"\"Module summary.\"\"\"\nx = 1\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Module summary."));
}

#[test]
fn test_file_without_comments_prints_nothing() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("plain.java");
    fs::write(&source, "class Plain {}\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_language_override_beats_the_extension() {
    let dir = tempdir().unwrap();
    // A .txt file, but told to read it as java.
    let source = dir.path().join("notes.txt");
    fs::write(&source, "/** noted */\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .arg("--language")
        .arg("java")
        .assert()
        .success()
        .stdout(predicate::str::contains(" noted "));
}

#[test]
fn test_unknown_extension_without_language_fails() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("notes.txt");
    fs::write(&source, "/** noted */\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--language"));
}

#[test]
fn test_unknown_docstyle_fails() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("Adder.java");
    fs::write(&source, "/** doc */\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .arg("--docstyle")
        .arg("no_such_style")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_style"));
}

#[test]
fn test_doxygen_docstyle_picks_up_extra_markers() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("lib.c");
    fs::write(&source, "/*! brief note */\nint f(void);\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .arg("--docstyle")
        .arg("doxygen")
        .assert()
        .success()
        .stdout(predicate::str::contains(" brief note "));
}

#[test]
fn test_definitions_dir_override() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("house.docstyle"),
        "[java]\nmarkers = (##, ##, ##)\n",
    )
    .unwrap();
    let source = dir.path().join("Odd.java");
    fs::write(&source, "## documented oddly\ncode\n").unwrap();

    extract_documentation()
        .arg("--file")
        .arg(&source)
        .arg("--docstyle")
        .arg("house")
        .arg("--definitions-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(" documented oddly"));
}

#[test]
fn test_directory_mode_walks_known_sources() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("a/one.java")
        .write_str("/** alpha */\nclass One {}\n")
        .unwrap();
    root.child("a/b/two.py")
        .write_str("\"\"\"beta\"\"\"\n")
        .unwrap();
    root.child("a/b/skipped.bin").write_str("/** nope */\n").unwrap();

    extract_documentation()
        .arg("--dir")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(" alpha "))
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("nope").not());

    root.close().unwrap();
}

#[test]
fn test_directory_mode_verbose_reports_totals() {
    let root = assert_fs::TempDir::new().unwrap();
    root.child("one.java")
        .write_str("/** alpha */\nclass One {}\n")
        .unwrap();

    extract_documentation()
        .arg("--dir")
        .arg(root.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("[VERBOSE]"))
        .stderr(predicate::str::contains("1 doc-comment(s) in total"));

    root.close().unwrap();
}

#[test]
fn test_requires_exactly_one_input_flag() {
    extract_documentation()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file or --dir"));

    let dir = tempdir().unwrap();
    let source = dir.path().join("A.java");
    fs::write(&source, "/** x */\n").unwrap();
    extract_documentation()
        .arg("--file")
        .arg(&source)
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .failure();
}

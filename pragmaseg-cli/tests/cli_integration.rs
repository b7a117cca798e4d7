//! Integration tests for the pragmaseg CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn pragmaseg() -> Command {
    Command::cargo_bin("pragmaseg").unwrap()
}

#[test]
fn test_process_english_text() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"));

    cmd.assert().success().stdout(
        "Dr. Smith went to the store.\n\
         He bought some milk and eggs.\n\
         The total was $12.50, which seemed fair.\n",
    );
}

#[test]
fn test_process_japanese_text() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .arg("-l")
        .arg("japanese");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("これはテストです。\n"))
        .stdout(predicate::str::contains(
            "日本語の文章を正しく分割できるか確認しています。\n",
        ))
        .stdout(predicate::str::contains("「引用文。」も含まれます。"));
}

#[test]
fn test_process_german_ordinal() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("german-sample.txt"))
        .arg("-l")
        .arg("de");

    cmd.assert()
        .success()
        .stdout("Der Vertrag endet am 3. Mai.\nDanach gilt die neue Regelung.\n");
}

#[test]
fn test_process_html_document() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("html-sample.html"))
        .arg("-d")
        .arg("html");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the site.\n"))
        .stdout(predicate::str::contains("Mr. Jones wrote this page.\n"))
        .stdout(predicate::str::contains("<p>").not());
}

#[test]
fn test_json_output() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let sentences = value.as_array().unwrap();
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0]["text"], "Dr. Smith went to the store.");
    assert_eq!(sentences[0]["index"], 0);
    assert_eq!(sentences[2]["index"], 2);
    assert_eq!(sentences[1]["length"], 29);
    assert!(sentences[0]["source"]
        .as_str()
        .unwrap()
        .ends_with("english-sample.txt"));
}

#[test]
fn test_markdown_output() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("japanese-sample.txt"))
        .arg("-l")
        .arg("ja")
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. これはテストです。"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 3*"))
        .stdout(predicate::str::contains("## ").not());
}

#[test]
fn test_stdin_input() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg("-")
        .write_stdin("Hello world. How are you? I am fine!");

    cmd.assert()
        .success()
        .stdout("Hello world.\nHow are you?\nI am fine!\n");
}

#[test]
fn test_multiple_files_keep_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.txt"), "Second file.").unwrap();
    fs::write(temp_dir.path().join("a.txt"), "First file. Still first.").unwrap();
    let pattern = temp_dir.path().join("*.txt");

    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(pattern.to_str().unwrap())
        .arg("-q");

    cmd.assert()
        .success()
        .stdout("First file.\nStill first.\nSecond file.\n");
}

#[test]
fn test_markdown_headings_for_multiple_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "One.").unwrap();
    fs::write(&b, "Two.").unwrap();

    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(&a)
        .arg("-i")
        .arg(&b)
        .arg("-f")
        .arg("markdown")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("*Total sentences: 2*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Dr. Smith went to the store."));
    assert!(content.contains("He bought some milk and eggs."));
}

#[test]
fn test_cli_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("pragmaseg.toml");
    fs::write(
        &config,
        "[processing]\ndefault_language = \"de\"\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("german-sample.txt"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[{\"text\":\"Der Vertrag endet am 3. Mai.\""));
}

#[test]
fn test_invalid_file() {
    let mut cmd = pragmaseg();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_unsupported_language() {
    let mut cmd = pragmaseg();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-l")
        .arg("klingon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language: klingon"));
}

#[test]
fn test_list_languages() {
    let mut cmd = pragmaseg();
    cmd.arg("list").arg("languages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("English"))
        .stdout(predicate::str::contains("Japanese"))
        .stdout(predicate::str::contains("Dutch"))
        .stdout(predicate::str::contains("Amharic"));
}

#[test]
fn test_list_formats() {
    let mut cmd = pragmaseg();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help() {
    let mut cmd = pragmaseg();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sentence boundary detection"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_version() {
    let mut cmd = pragmaseg();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pragmaseg"));
}

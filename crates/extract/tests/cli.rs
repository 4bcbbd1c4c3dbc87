// ABOUTME: CLI tests for the gpress-extract binary using assert_cmd.
// ABOUTME: Covers the JSON envelope contract: content on stdout, errors on stderr, non-zero exit on failure.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn bin() -> Command {
    Command::cargo_bin("gpress-extract").expect("binary should build")
}

#[test]
fn degraded_source_derives_title_without_any_html() {
    bin()
        .args([
            "https://www.hindustantimes.com/india-news/port-expansion-cleared-101749461946504.html",
            "hindustan-times",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Article Title: Port Expansion Cleared",
        ));
}

#[test]
fn unknown_source_fails_with_json_error() {
    bin()
        .args(["https://example.com/a", "guardian"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown source"))
        .stderr(predicate::str::contains("\"error\""));
}

#[test]
fn extracts_from_html_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"<html><body><div class="articlebodycontent"><p>Council session adjourned early.</p></div></body></html>"#
    )
    .expect("write html");

    bin()
        .args(["https://www.thehindu.com/news/a.ece", "hindu"])
        .arg("--html")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Council session adjourned early."));
}

#[test]
fn extracts_from_stdin() {
    bin()
        .args(["https://www.thehindu.com/news/b.ece", "hindu", "--html", "-"])
        .write_stdin(
            r#"<html><body><article><p>Piped document body.</p></article></body></html>"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Piped document body."));
}

#[test]
fn missing_document_reports_extraction_failure() {
    bin()
        .args(["https://www.thehindu.com/news/c.ece", "hindu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("all_locators_failed"));
}

#[test]
fn failed_derivation_reports_status() {
    bin()
        .args([
            "https://www.hindustantimes.com/articles/101749461946504",
            "hindustan-times",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("derivation_failed"));
}

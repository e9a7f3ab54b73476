//! End-to-end tests for the revdash binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn revdash() -> Command {
    let mut cmd = Command::cargo_bin("revdash").unwrap();
    cmd.arg("--no-color");
    cmd
}

/// Write a config plus two small UTF-8 review CSVs into `dir`
fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let csv_a = dir.join("brand_a.csv");
    fs::write(
        &csv_a,
        "rating,review_text\n\
         5,배송이 빨라요 안장이 편해요\n\
         5,안장이 푹신해요\n\
         1,브레이크 소음이 심해요\n",
    )
    .unwrap();

    let csv_b = dir.join("brand_b.csv");
    fs::write(&csv_b, "rating,review_text\n4,가성비 좋아요\n").unwrap();

    let config_path = dir.join("revdash.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[[datasets]]
id = "brand-a"
label = "Brand A"
path = "{}"

[[datasets]]
id = "brand-b"
label = "Brand B"
path = "{}"

[ingest]
encodings = ["utf-8"]
"#,
            csv_a.display(),
            csv_b.display()
        ),
    )
    .unwrap();
    config_path
}

#[test]
fn test_help_lists_commands() {
    revdash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dash"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_summary_prints_brand_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    revdash()
        .args(["-c", config.to_str().unwrap(), "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand A"))
        .stdout(predicate::str::contains("Brand B"))
        .stdout(predicate::str::contains("4.00"));
}

#[test]
fn test_keywords_filters_by_brand() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    revdash()
        .args(["-c", config.to_str().unwrap(), "keywords", "--brand", "brand-b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand B"))
        .stdout(predicate::str::contains("가성비"))
        .stdout(predicate::str::contains("Brand A").not());
}

#[test]
fn test_keywords_unknown_brand_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    revdash()
        .args(["-c", config.to_str().unwrap(), "keywords", "--brand", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_report_json_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    revdash()
        .args(["-c", config.to_str().unwrap(), "report", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generated_at"))
        .stdout(predicate::str::contains("brand-a"));
}

#[test]
fn test_report_markdown_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());
    let out = dir.path().join("report.md");

    revdash()
        .args([
            "-c",
            config.to_str().unwrap(),
            "report",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let rendered = fs::read_to_string(&out).unwrap();
    assert!(rendered.contains("# Review Analytics Report"));
    assert!(rendered.contains("Brand A"));
}

#[test]
fn test_report_unknown_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    revdash()
        .args(["-c", config.to_str().unwrap(), "report", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_config_init_and_validate() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("revdash.toml");

    revdash()
        .args(["-c", config.to_str().unwrap(), "config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    // Sample datasets point at files that do not exist yet
    revdash()
        .args(["-c", config.to_str().unwrap(), "config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn test_missing_config_fails_with_hint() {
    revdash()
        .args(["-c", "/nonexistent/revdash.toml", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config init"));
}

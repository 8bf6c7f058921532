//! End-to-end tests for the `artbook` binary against the checked-in fixtures.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn artbook(args: &[&str], source: &Path, output: &Path, temp: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_artbook"))
        .args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(output)
        .arg("--temp-dir")
        .arg(temp)
        .output()
        .expect("failed to run artbook")
}

#[test]
fn build_writes_the_whole_site() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = tmp.path().join("dist");
    let temp = tmp.path().join("temp");

    let result = artbook(&["build"], &fixtures(), &out, &temp);
    assert!(
        result.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    assert!(temp.join("manifest.json").is_file());
    assert!(out.join("index.html").is_file());
    assert!(out.join("robots.txt").is_file());
    assert!(out.join("interview/001-jane-doe/index.html").is_file());
    assert!(out.join("interview/001-jane-doe/question-1/index.html").is_file());
    assert!(out.join("interview/001-jane-doe/question-1/morning.png").is_file());
    assert!(out.join("interview/000-lee-park/question-1/lines.webp").is_file());
    assert!(!out.join("interview/001-jane-doe/question-1/metadata.json").exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("==> Stage 1: Scanning"));
    assert!(stdout.contains("Generated 3 interviews, 5 question pages"));
    assert!(stdout.contains("==> Build complete"));
}

#[test]
fn scan_then_generate_matches_build() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = tmp.path().join("dist");
    let temp = tmp.path().join("temp");

    assert!(artbook(&["scan"], &fixtures(), &out, &temp).status.success());
    let manifest = std::fs::read_to_string(temp.join("manifest.json")).unwrap();
    assert!(manifest.contains("\"interviewTitle\": \"Lines and Silence\""));

    assert!(artbook(&["generate"], &fixtures(), &out, &temp).status.success());
    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("Studio Conversations"));
    assert!(index.contains("Lines and Silence"));
}

#[test]
fn check_passes_without_strict() {
    let tmp = tempfile::TempDir::new().unwrap();
    let result = artbook(&["check"], &fixtures(), tmp.path(), tmp.path());

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Warnings"));
    assert!(stdout.contains("==> Content is valid"));
}

#[test]
fn strict_check_fails_on_warnings() {
    let tmp = tempfile::TempDir::new().unwrap();
    let result = artbook(&["check", "--strict"], &fixtures(), tmp.path(), tmp.path());

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("1 warning(s) found"), "stderr: {stderr}");
}

#[test]
fn check_reports_missing_response() {
    let tmp = tempfile::TempDir::new().unwrap();
    let question = tmp.path().join("interviews/001-ana/question-1");
    std::fs::create_dir_all(&question).unwrap();
    std::fs::write(
        tmp.path().join("interviews/001-ana/metadata.json"),
        r#"{"artistName":"Ana","interviewTitle":"Ana","interviewNumber":1,"totalQuestions":1}"#,
    )
    .unwrap();
    std::fs::write(
        question.join("metadata.json"),
        r#"{"question":"Why?","responseType":"drawing","artist":"Ana","interviewNumber":1,"questionNumber":1}"#,
    )
    .unwrap();

    let result = artbook(&["check"], tmp.path(), tmp.path(), tmp.path());
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("question-1"), "stderr: {stderr}");
}

#[test]
fn gen_config_prints_documented_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_artbook"))
        .arg("gen-config")
        .output()
        .expect("failed to run artbook");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("site_title"));
    assert!(stdout.contains("[navigation]"));
    assert!(stdout.contains("min_swipe_distance = 50"));
}

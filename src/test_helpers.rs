//! Shared test utilities.
//!
//! Two kinds of helpers:
//!
//! - **Builders** that write interview and question folders into a temp
//!   directory, for tests that need a specific edge case.
//! - **Lookups** over a scanned [`Manifest`] that panic with the available
//!   names on a miss, for tests against `fixtures/content/`.
//!
//! ```rust
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let jane = find_interview(&manifest, "001-jane-doe");
//! assert_eq!(question_folders(jane), ["question-1", "question-2", "question-3"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::metadata::METADATA_FILE;
use crate::scan::{Interview, Manifest, Question};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders (paths relative to an interviews root)
// =========================================================================

/// Write `<root>/<folder>/metadata.json` and return the interview dir.
pub fn write_interview(
    root: &Path,
    folder: &str,
    artist: &str,
    number: u32,
    total_questions: u32,
) -> PathBuf {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    let json = serde_json::json!({
        "artistName": artist,
        "interviewTitle": format!("In conversation with {artist}"),
        "interviewNumber": number,
        "totalQuestions": total_questions,
    });
    fs::write(dir.join(METADATA_FILE), json.to_string()).unwrap();
    dir
}

/// Write `<root>/<interview>/question-<number>/metadata.json` and return the
/// question dir.
pub fn write_question(
    root: &Path,
    interview: &str,
    number: u32,
    question: &str,
    response_type: &str,
    artist: &str,
    interview_number: u32,
) -> PathBuf {
    let dir = root.join(interview).join(format!("question-{number}"));
    fs::create_dir_all(&dir).unwrap();
    let json = serde_json::json!({
        "question": question,
        "responseType": response_type,
        "artist": artist,
        "interviewNumber": interview_number,
        "questionNumber": number,
    });
    fs::write(dir.join(METADATA_FILE), json.to_string()).unwrap();
    dir
}

/// A content root with one interview of `questions` drawing answers, each
/// with a placeholder image. Returns `(tempdir, interviews root)`.
pub fn simple_content(questions: u32) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("interviews");
    write_interview(&root, "001-ana", "Ana", 1, questions);
    for n in 1..=questions {
        let question = format!("Question {n}?");
        let dir = write_question(&root, "001-ana", n, &question, "drawing", "Ana", 1);
        fs::write(dir.join("answer.jpg"), "fake image").unwrap();
    }
    (tmp, root)
}

// =========================================================================
// Manifest lookups (panic with the available names on a miss)
// =========================================================================

pub fn find_interview<'a>(manifest: &'a Manifest, folder: &str) -> &'a Interview {
    manifest
        .interviews
        .iter()
        .find(|i| i.folder == folder)
        .unwrap_or_else(|| {
            panic!(
                "interview '{folder}' not found. Available: {:?}",
                interview_folders(manifest)
            )
        })
}

pub fn find_question<'a>(interview: &'a Interview, folder: &str) -> &'a Question {
    interview
        .questions
        .iter()
        .find(|q| q.folder == folder)
        .unwrap_or_else(|| {
            panic!(
                "question '{folder}' not found in '{}'. Available: {:?}",
                interview.folder,
                question_folders(interview)
            )
        })
}

/// Interview folders in manifest order.
pub fn interview_folders(manifest: &Manifest) -> Vec<&str> {
    manifest
        .interviews
        .iter()
        .map(|i| i.folder.as_str())
        .collect()
}

/// Question folders in interview order.
pub fn question_folders(interview: &Interview) -> Vec<&str> {
    interview
        .questions
        .iter()
        .map(|q| q.folder.as_str())
        .collect()
}

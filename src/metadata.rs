//! Filesystem-backed metadata lookup.
//!
//! A [`Library`] is rooted at the interviews directory and answers four
//! questions about it:
//!
//! | Lookup | Reads |
//! |--------|-------|
//! | [`Library::interview_folders`] | directories under the root, sorted by name |
//! | [`Library::interview_metadata`] | `<interview>/metadata.json` |
//! | [`Library::question_metadata`] | `<interview>/<question>/metadata.json` |
//! | [`Library::interview_questions`] | `question-N` directories, sorted by N |
//!
//! ## Strict and lenient lookups
//!
//! Each lookup comes in two flavours. The `read_*` / `list_*` methods return
//! a [`MetadataError`] describing exactly what failed; the scanner uses them
//! so that `artbook check` can point at the broken file. The short-named
//! methods are the library-level API for callers that prefer to carry on
//! past a broken folder: they never fail, logging the error and falling back
//! to an empty list or `None`.

use crate::naming;
use crate::schema::{InterviewMetadata, QuestionMetadata};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-folder metadata file.
pub const METADATA_FILE: &str = "metadata.json";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid metadata in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl MetadataError {
    /// The file or directory the error is about.
    pub fn path(&self) -> &Path {
        match self {
            MetadataError::Io { path, .. } | MetadataError::Json { path, .. } => path,
        }
    }

    /// Whether the error is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MetadataError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Metadata lookups over an interviews directory.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Library for a content directory, using its configured interviews dir.
    pub fn for_content(content_root: &Path, interviews_dir: &str) -> Self {
        Self::new(content_root.join(interviews_dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn interview_path(&self, interview: &str) -> PathBuf {
        self.root.join(interview)
    }

    pub fn question_path(&self, interview: &str, question: &str) -> PathBuf {
        self.root.join(interview).join(question)
    }

    // ------------------------------------------------------------------
    // Strict lookups
    // ------------------------------------------------------------------

    /// All interview folder names, sorted lexicographically.
    pub fn list_interview_folders(&self) -> Result<Vec<String>, MetadataError> {
        let mut folders = subdirectories(&self.root)?;
        folders.sort();
        Ok(folders)
    }

    pub fn read_interview_metadata(
        &self,
        interview: &str,
    ) -> Result<InterviewMetadata, MetadataError> {
        read_json(&self.interview_path(interview).join(METADATA_FILE))
    }

    pub fn read_question_metadata(
        &self,
        interview: &str,
        question: &str,
    ) -> Result<QuestionMetadata, MetadataError> {
        read_json(&self.question_path(interview, question).join(METADATA_FILE))
    }

    /// Question folder names of an interview, sorted by question number.
    pub fn list_interview_questions(&self, interview: &str) -> Result<Vec<String>, MetadataError> {
        let mut questions: Vec<String> = subdirectories(&self.interview_path(interview))?
            .into_iter()
            .filter(|name| naming::is_question_folder(name))
            .collect();
        questions.sort_by_cached_key(|name| naming::question_sort_key(name));
        Ok(questions)
    }

    // ------------------------------------------------------------------
    // Lenient lookups
    // ------------------------------------------------------------------

    /// Like [`Self::list_interview_folders`], but logs and returns an empty
    /// list on error.
    pub fn interview_folders(&self) -> Vec<String> {
        self.list_interview_folders().unwrap_or_else(|e| {
            log::error!("Error reading interview directories: {e}");
            Vec::new()
        })
    }

    pub fn interview_metadata(&self, interview: &str) -> Option<InterviewMetadata> {
        self.read_interview_metadata(interview)
            .map_err(|e| log::error!("Error reading metadata for {interview}: {e}"))
            .ok()
    }

    pub fn question_metadata(&self, interview: &str, question: &str) -> Option<QuestionMetadata> {
        self.read_question_metadata(interview, question)
            .map_err(|e| {
                log::error!("Error reading question metadata for {interview}/{question}: {e}")
            })
            .ok()
    }

    pub fn interview_questions(&self, interview: &str) -> Vec<String> {
        self.list_interview_questions(interview)
            .unwrap_or_else(|e| {
                log::error!("Error reading questions for {interview}: {e}");
                Vec::new()
            })
    }
}

/// Names of the directories directly under `path`, in read order.
fn subdirectories(path: &Path) -> Result<Vec<String>, MetadataError> {
    let io_err = |source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MetadataError> {
    let content = fs::read_to_string(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| MetadataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResponseType;
    use crate::test_helpers::{write_interview, write_question};
    use tempfile::TempDir;

    fn library(tmp: &TempDir) -> Library {
        Library::new(tmp.path())
    }

    // =========================================================================
    // interview_folders
    // =========================================================================

    #[test]
    fn interview_folders_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["b-artist", "a-artist", "c-artist"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }
        assert_eq!(
            library(&tmp).interview_folders(),
            vec!["a-artist", "b-artist", "c-artist"]
        );
    }

    #[test]
    fn interview_folders_skip_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("001-jane")).unwrap();
        fs::write(tmp.path().join("README.md"), "notes").unwrap();
        assert_eq!(library(&tmp).interview_folders(), vec!["001-jane"]);
    }

    #[test]
    fn interview_folders_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let lib = Library::new(tmp.path().join("nope"));
        assert!(lib.interview_folders().is_empty());
        assert!(lib.list_interview_folders().unwrap_err().is_not_found());
    }

    // =========================================================================
    // interview_metadata
    // =========================================================================

    #[test]
    fn interview_metadata_parses_file() {
        let tmp = TempDir::new().unwrap();
        write_interview(tmp.path(), "001-jane", "Jane Doe", 1, 2);

        let meta = library(&tmp).interview_metadata("001-jane").unwrap();
        assert_eq!(meta.artist_name, "Jane Doe");
        assert_eq!(meta.interview_number, 1);
        assert_eq!(meta.total_questions, 2);
    }

    #[test]
    fn interview_metadata_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("001-jane")).unwrap();

        let lib = library(&tmp);
        assert!(lib.interview_metadata("001-jane").is_none());
        let err = lib.read_interview_metadata("001-jane").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.path().ends_with("001-jane/metadata.json"));
    }

    #[test]
    fn interview_metadata_invalid_json_is_none() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("001-jane");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(METADATA_FILE), "{ not json").unwrap();

        let lib = library(&tmp);
        assert!(lib.interview_metadata("001-jane").is_none());
        assert!(matches!(
            lib.read_interview_metadata("001-jane"),
            Err(MetadataError::Json { .. })
        ));
    }

    // =========================================================================
    // question_metadata
    // =========================================================================

    #[test]
    fn question_metadata_parses_file() {
        let tmp = TempDir::new().unwrap();
        write_interview(tmp.path(), "001-jane", "Jane Doe", 1, 1);
        write_question(tmp.path(), "001-jane", 1, "Why ink?", "handwritten", "Jane Doe", 1);

        let meta = library(&tmp)
            .question_metadata("001-jane", "question-1")
            .unwrap();
        assert_eq!(meta.question, "Why ink?");
        assert_eq!(meta.response_type, ResponseType::Handwritten);
        assert_eq!(meta.question_number, 1);
    }

    #[test]
    fn question_metadata_schema_violation_is_none() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("001-jane/question-1");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(METADATA_FILE),
            r#"{"question": "Q", "responseType": "sculpture", "artist": "A",
                "interviewNumber": 1, "questionNumber": 1}"#,
        )
        .unwrap();

        let lib = library(&tmp);
        assert!(lib.question_metadata("001-jane", "question-1").is_none());
    }

    // =========================================================================
    // interview_questions
    // =========================================================================

    #[test]
    fn interview_questions_sorted_numerically() {
        let tmp = TempDir::new().unwrap();
        let interview = tmp.path().join("001-jane");
        for name in ["question-10", "question-2", "question-1"] {
            fs::create_dir_all(interview.join(name)).unwrap();
        }

        assert_eq!(
            library(&tmp).interview_questions("001-jane"),
            vec!["question-1", "question-2", "question-10"]
        );
    }

    #[test]
    fn interview_questions_only_question_directories() {
        let tmp = TempDir::new().unwrap();
        let interview = tmp.path().join("001-jane");
        fs::create_dir_all(interview.join("question-1")).unwrap();
        fs::create_dir_all(interview.join("extras")).unwrap();
        fs::write(interview.join("question-2"), "a file, not a folder").unwrap();
        fs::write(interview.join(METADATA_FILE), "{}").unwrap();

        assert_eq!(
            library(&tmp).interview_questions("001-jane"),
            vec!["question-1"]
        );
    }

    #[test]
    fn interview_questions_unnumbered_sort_last() {
        let tmp = TempDir::new().unwrap();
        let interview = tmp.path().join("001-jane");
        for name in ["question-intro", "question-2", "question-1"] {
            fs::create_dir_all(interview.join(name)).unwrap();
        }

        assert_eq!(
            library(&tmp).interview_questions("001-jane"),
            vec!["question-1", "question-2", "question-intro"]
        );
    }

    #[test]
    fn interview_questions_missing_interview_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(library(&tmp).interview_questions("ghost").is_empty());
    }

    #[test]
    fn for_content_joins_interviews_dir() {
        let lib = Library::for_content(Path::new("/site/content"), "interviews");
        assert_eq!(lib.root(), Path::new("/site/content/interviews"));
        assert_eq!(
            lib.question_path("a", "question-1"),
            Path::new("/site/content/interviews/a/question-1")
        );
    }
}

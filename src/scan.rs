//! Content scanning and manifest generation.
//!
//! Stage 1 of the build. Walks the interviews directory with the strict
//! [`Library`] lookups and produces a [`Manifest`] that the generate stage
//! consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml
//! └── interviews/
//!     ├── 001-jane-doe/
//!     │   ├── metadata.json          # InterviewMetadata
//!     │   ├── question-1/
//!     │   │   ├── metadata.json      # QuestionMetadata
//!     │   │   └── morning.png        # Image response
//!     │   └── question-2/
//!     │       ├── metadata.json
//!     │       ├── note.jpg
//!     │       └── response.txt       # Text response (or response.md)
//!     └── 002-sam-okafor/
//!         └── ...
//! ```
//!
//! ## Ordering
//!
//! - Interviews by `interviewNumber`, then folder name.
//! - Questions by the number in their folder name (`question-10` after
//!   `question-2`); folders without a number go last.
//! - Response images by filename.
//!
//! ## Validation
//!
//! Hard errors stop the scan:
//! - missing interviews directory
//! - missing or malformed `metadata.json`
//! - two question folders with the same number
//! - a question with neither an image nor a text response
//!
//! Inconsistencies that still produce a usable site become [`Manifest::warnings`]:
//! a `totalQuestions` that disagrees with the folders present, question
//! metadata naming a different artist, interview number, or question number
//! than its location implies, and interviews without questions.

use crate::config::{self, SiteConfig};
use crate::metadata::{Library, METADATA_FILE, MetadataError};
use crate::naming;
use crate::schema::{InterviewMetadata, QuestionMetadata};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),
    #[error("Interviews directory not found: {0}")]
    MissingInterviews(PathBuf),
    #[error("Duplicate question number {0} in {1}")]
    DuplicateQuestion(u32, PathBuf),
    #[error("Question has no response (no image, response.md or response.txt): {0}")]
    NoResponse(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub interviews: Vec<Interview>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub config: SiteConfig,
}

/// An interview folder with its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    /// Folder name; also the URL segment.
    pub folder: String,
    pub metadata: InterviewMetadata,
    pub questions: Vec<Question>,
}

/// A question folder with the artist's response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Folder name (`question-N`); also the URL segment.
    pub folder: String,
    /// Number parsed from the folder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub metadata: QuestionMetadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ResponseImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextResponse>,
}

/// An image file answering a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseImage {
    pub filename: String,
    /// Path relative to the content root.
    pub source_path: String,
    /// Pixel `(width, height)`, when the header could be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
}

/// A written answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextResponse {
    /// File the text was read from (`response.md` or `response.txt`).
    pub filename: String,
    pub format: TextFormat,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Markdown,
    Plain,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Text response files in priority order.
const TEXT_RESPONSES: &[(&str, TextFormat)] = &[
    ("response.md", TextFormat::Markdown),
    ("response.txt", TextFormat::Plain),
];

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let library = Library::for_content(root, &config.interviews_dir);
    if !library.root().is_dir() {
        return Err(ScanError::MissingInterviews(library.root().to_path_buf()));
    }

    let mut warnings = Vec::new();
    let mut interviews = Vec::new();
    for folder in library.list_interview_folders()? {
        if folder.starts_with('.') {
            continue;
        }
        interviews.push(scan_interview(&library, root, &folder, &mut warnings)?);
    }

    // Stable sort: folder order breaks ties.
    interviews.sort_by_key(|i| i.metadata.interview_number);

    let mut seen_numbers: HashMap<u32, &str> = HashMap::new();
    for interview in &interviews {
        let number = interview.metadata.interview_number;
        if let Some(first) = seen_numbers.insert(number, &interview.folder) {
            warnings.push(format!(
                "{}: interviewNumber {} is also used by {}",
                interview.folder, number, first
            ));
        }
    }

    for warning in &warnings {
        log::warn!("{warning}");
    }

    Ok(Manifest {
        interviews,
        warnings,
        config,
    })
}

fn scan_interview(
    library: &Library,
    root: &Path,
    folder: &str,
    warnings: &mut Vec<String>,
) -> Result<Interview, ScanError> {
    let metadata = library.read_interview_metadata(folder)?;
    let question_folders = library.list_interview_questions(folder)?;

    let mut numbers = HashSet::new();
    for name in &question_folders {
        if let Some(n) = naming::question_number(name)
            && !numbers.insert(n)
        {
            return Err(ScanError::DuplicateQuestion(
                n,
                library.interview_path(folder),
            ));
        }
    }

    let mut questions = Vec::with_capacity(question_folders.len());
    for name in &question_folders {
        let question = scan_question(library, root, folder, name)?;
        check_question(folder, &metadata, &question, warnings);
        questions.push(question);
    }

    if questions.is_empty() {
        warnings.push(format!("{folder}: interview has no question folders"));
    }
    if metadata.total_questions as usize != questions.len() {
        warnings.push(format!(
            "{folder}: totalQuestions is {} but {} question folders were found",
            metadata.total_questions,
            questions.len()
        ));
    }

    Ok(Interview {
        folder: folder.to_string(),
        metadata,
        questions,
    })
}

fn scan_question(
    library: &Library,
    root: &Path,
    interview: &str,
    folder: &str,
) -> Result<Question, ScanError> {
    let metadata = library.read_question_metadata(interview, folder)?;
    let dir = library.question_path(interview, folder);

    let mut image_paths: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .collect();
    image_paths.sort();

    let images = image_paths
        .iter()
        .map(|path| response_image(path, root))
        .collect();

    let text = read_text_response(&dir)?;

    let question = Question {
        folder: folder.to_string(),
        number: naming::question_number(folder),
        metadata,
        images,
        text,
    };
    if question.images.is_empty() && question.text.is_none() {
        return Err(ScanError::NoResponse(dir));
    }
    Ok(question)
}

/// Compare question metadata against where the question lives.
fn check_question(
    interview_folder: &str,
    interview: &InterviewMetadata,
    question: &Question,
    warnings: &mut Vec<String>,
) {
    let location = format!("{interview_folder}/{}", question.folder);
    let meta = &question.metadata;

    if meta.interview_number != interview.interview_number {
        warnings.push(format!(
            "{location}: interviewNumber {} does not match interview's {}",
            meta.interview_number, interview.interview_number
        ));
    }
    if let Some(n) = question.number
        && meta.question_number != n
    {
        warnings.push(format!(
            "{location}: questionNumber {} does not match folder number {}",
            meta.question_number, n
        ));
    }
    if meta.artist != interview.artist_name {
        warnings.push(format!(
            "{location}: artist \"{}\" differs from interview artist \"{}\"",
            meta.artist, interview.artist_name
        ));
    }
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

fn response_image(path: &Path, root: &Path) -> ResponseImage {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source_path = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();
    let dimensions = match image::image_dimensions(path) {
        Ok(dims) => Some(dims),
        Err(e) => {
            log::debug!("cannot read dimensions of {}: {e}", path.display());
            None
        }
    };
    ResponseImage {
        filename,
        source_path,
        dimensions,
    }
}

/// Read the first non-empty text response file, if any.
fn read_text_response(dir: &Path) -> Result<Option<TextResponse>, ScanError> {
    for (filename, format) in TEXT_RESPONSES {
        let path = dir.join(filename);
        if !path.is_file() {
            continue;
        }
        let body = fs::read_to_string(&path)?.trim().to_string();
        if body.is_empty() {
            continue;
        }
        return Ok(Some(TextResponse {
            filename: filename.to_string(),
            format: *format,
            body,
        }));
    }
    Ok(None)
}

/// Whether `name` is a file the scanner consumes itself rather than a
/// response asset.
pub fn is_reserved_file(name: &str) -> bool {
    name == METADATA_FILE || TEXT_RESPONSES.iter().any(|(f, _)| *f == name)
}

//! Content schemas for interviews and questions.
//!
//! Every interview folder and every question folder carries a `metadata.json`
//! file. These types are the canonical shape of those files and are also
//! embedded verbatim in the scan manifest.
//!
//! ```json
//! {
//!   "artistName": "Jane Doe",
//!   "interviewTitle": "Lines and Silence",
//!   "interviewNumber": 1,
//!   "totalQuestions": 3,
//!   "description": "Optional blurb shown on the overview page"
//! }
//! ```
//!
//! ```json
//! {
//!   "question": "What does your morning look like?",
//!   "responseType": "drawing",
//!   "artist": "Jane Doe",
//!   "interviewNumber": 1,
//!   "questionNumber": 1
//! }
//! ```
//!
//! Keys are camelCase. Unknown keys are ignored so that content authors can
//! keep private notes in the same file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata for one interview (`<interview>/metadata.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewMetadata {
    pub artist_name: String,
    pub interview_title: String,
    pub interview_number: u32,
    /// Number of questions the author expects. Compared against the
    /// question folders actually present during scan.
    pub total_questions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Metadata for one question (`<interview>/question-N/metadata.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionMetadata {
    pub question: String,
    pub response_type: ResponseType,
    pub artist: String,
    pub interview_number: u32,
    pub question_number: u32,
}

/// The medium an artist answered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Drawing,
    Handwritten,
    Digital,
    Mixed,
}

impl ResponseType {
    /// Display label used in badges.
    pub fn label(self) -> &'static str {
        match self {
            ResponseType::Drawing => "Drawing",
            ResponseType::Handwritten => "Handwritten",
            ResponseType::Digital => "Digital",
            ResponseType::Mixed => "Mixed",
        }
    }

    /// Lowercase identifier, identical to the JSON value. Used as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseType::Drawing => "drawing",
            ResponseType::Handwritten => "handwritten",
            ResponseType::Digital => "digital",
            ResponseType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

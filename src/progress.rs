//! Reading progress.
//!
//! The navigation script remembers which questions a visitor has opened. The
//! record lives in `localStorage` under the configured key as a JSON object
//! mapping interview ids to the question ids seen, in visit order:
//!
//! ```json
//! { "001-jane-doe": ["question-1", "question-3"] }
//! ```
//!
//! This module owns the URL scheme that makes that work and a Rust model of
//! the stored record. Question pages live at `/interview/<id>/<question>/`;
//! both the generator and the script recognise a question page by splitting
//! its path on `/`, dropping empty segments, and requiring at least three
//! segments with `interview` first.
//!
//! Folder names go into URLs percent-encoded, and are decoded again when a
//! path is parsed, so ids in the record are always plain folder names:
//!
//! ```text
//! 001-zoë/question-1  →  /interview/001-zo%C3%AB/question-1/
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Characters escaped in a path segment: the URL path set plus `/` and `%`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// First path segment of every interview page.
pub const INTERVIEW_SEGMENT: &str = "interview";

/// Percent-encode a file or folder name for use as one URL path segment.
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT).to_string()
}

/// URL of an interview's overview page.
pub fn interview_url(interview: &str) -> String {
    format!("/{INTERVIEW_SEGMENT}/{}/", encode_segment(interview))
}

/// URL of a question page.
pub fn question_url(interview: &str, question: &str) -> String {
    format!(
        "/{INTERVIEW_SEGMENT}/{}/{}/",
        encode_segment(interview),
        encode_segment(question)
    )
}

/// Split a question page path into decoded `(interview, question)` ids.
///
/// Returns `None` for anything that is not a question page, including
/// interview overview pages.
pub fn parse_question_path(path: &str) -> Option<(Cow<'_, str>, Cow<'_, str>)> {
    let mut parts = path.split('/').filter(|s| !s.is_empty());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(INTERVIEW_SEGMENT), Some(interview), Some(question)) => Some((
            percent_decode_str(interview).decode_utf8_lossy(),
            percent_decode_str(question).decode_utf8_lossy(),
        )),
        _ => None,
    }
}

/// Questions visited per interview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<String, Vec<String>>);

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored record. A missing record is an empty one.
    pub fn from_stored(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw.unwrap_or("{}"))
    }

    /// Record a visit to `path`. Returns `true` if a new question was added.
    ///
    /// Non-question paths and repeat visits leave the record unchanged.
    pub fn record(&mut self, path: &str) -> bool {
        let Some((interview, question)) = parse_question_path(path) else {
            return false;
        };
        let seen = self.0.entry(interview.into_owned()).or_default();
        if seen.iter().any(|q| *q == question) {
            return false;
        }
        seen.push(question.into_owned());
        true
    }

    /// Whether the question page `href` points to has been visited.
    pub fn is_completed(&self, href: &str) -> bool {
        parse_question_path(href).is_some_and(|(interview, question)| {
            self.0
                .get(interview.as_ref())
                .is_some_and(|seen| seen.iter().any(|q| *q == question))
        })
    }

    /// Questions seen for one interview, in visit order.
    pub fn visited(&self, interview: &str) -> &[String] {
        self.0.get(interview).map(Vec::as_slice).unwrap_or_default()
    }
}

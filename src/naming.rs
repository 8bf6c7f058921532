//! Folder naming conventions.
//!
//! Question folders are named `question-<N>` where `<N>` is the question's
//! position in the interview. The number is read the way a lenient integer
//! parser would: leading ASCII digits after the first dash, anything after
//! them ignored.
//!
//! - `question-1` → 1
//! - `question-12` → 12
//! - `question-3b` → 3
//! - `question-intro` → no number
//!
//! Numbers too large for a `u32` saturate at `u32::MAX` rather than being
//! treated as missing.
//!
//! Interview folders have no required shape; their name is the URL segment.

/// Prefix every question folder name starts with.
pub const QUESTION_PREFIX: &str = "question-";

/// Whether a folder name follows the question folder convention.
///
/// Matching is case-sensitive: `Question-1` is not a question folder.
pub fn is_question_folder(name: &str) -> bool {
    name.starts_with(QUESTION_PREFIX)
}

/// Parse leading ASCII digits of `s` as an integer, saturating on overflow.
pub fn leading_number(s: &str) -> Option<u32> {
    s.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(None, |acc: Option<u32>, digit| {
            let value = acc.unwrap_or(0);
            Some(value.saturating_mul(10).saturating_add(u32::from(digit - b'0')))
        })
}

/// The number of a question folder: leading digits of the text after the
/// first dash.
pub fn question_number(name: &str) -> Option<u32> {
    name.split_once('-').and_then(|(_, rest)| leading_number(rest))
}

/// Sort key for question folders: numbered folders first in numeric order,
/// unnumbered ones after them, ties broken by name.
pub fn question_sort_key(name: &str) -> (bool, u32, String) {
    let number = question_number(name);
    (number.is_none(), number.unwrap_or(0), name.to_string())
}

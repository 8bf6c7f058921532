//! CLI output formatting.
//!
//! Output is information-first: every interview and question leads with its
//! positional index and its title, and filesystem paths follow as indented
//! context lines.
//!
//! ## Scan / Check
//!
//! ```text
//! Interviews
//! 001 Lines and Silence · Jane Doe (3 questions)
//!     Source: interviews/001-jane-doe/
//!     An ink illustrator on slow mornings and quick sketches.
//!     001 Draw your morning. [Drawing]
//!         Images: morning.png
//!     002 What is the first tool you ever loved? [Handwritten]
//!         Images: note.jpg
//!         Text: response.txt
//!
//! Warnings
//!     002-sam-okafor: totalQuestions is 2 but 1 question folders were found
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Lines and Silence → interview/001-jane-doe/index.html
//!     001 Draw your morning. → interview/001-jane-doe/question-1/index.html
//!
//! Generated 3 interviews, 5 question pages
//! ```
//!
//! Each section has a `format_*` function returning lines, for testability,
//! and a `print_*` wrapper.

use crate::scan::{Interview, Manifest, Question};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Interview header: index, title, artist, and optional question count.
///
/// ```text
/// 001 Lines and Silence · Jane Doe (3 questions)
/// ```
fn interview_header(index: usize, interview: &Interview, with_count: bool) -> String {
    let meta = &interview.metadata;
    let head = format!(
        "{} {} \u{b7} {}",
        format_index(index),
        meta.interview_title,
        meta.artist_name
    );
    if with_count {
        let n = interview.questions.len();
        let noun = if n == 1 { "question" } else { "questions" };
        format!("{head} ({n} {noun})")
    } else {
        head
    }
}

/// Question line: index and the question text, truncated.
fn question_line(index: usize, question: &Question) -> String {
    format!(
        "{} {}",
        format_index(index),
        truncate(&question.metadata.question, 60)
    )
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format scan output showing the discovered interviews.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let config = &manifest.config;
    let mut lines = vec!["Interviews".to_string()];

    if manifest.interviews.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }

    for (i, interview) in manifest.interviews.iter().enumerate() {
        lines.push(interview_header(i + 1, interview, true));
        lines.push(format!(
            "{}Source: {}/{}/",
            indent(1),
            config.interviews_dir,
            interview.folder
        ));
        if let Some(desc) = &interview.metadata.description {
            let desc = truncate(desc.trim(), 60);
            if !desc.is_empty() {
                lines.push(format!("{}{}", indent(1), desc));
            }
        }

        for (j, question) in interview.questions.iter().enumerate() {
            lines.push(format!(
                "{}{} [{}]",
                indent(1),
                question_line(j + 1, question),
                question.metadata.response_type
            ));
            if !question.images.is_empty() {
                let names: Vec<&str> = question
                    .images
                    .iter()
                    .map(|i| i.filename.as_str())
                    .collect();
                lines.push(format!("{}Images: {}", indent(2), names.join(", ")));
            }
            if let Some(text) = &question.text {
                lines.push(format!("{}Text: {}", indent(2), text.filename));
            }
        }
    }

    if !manifest.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &manifest.warnings {
            lines.push(format!("{}{}", indent(1), warning));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(&config.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), config.assets_dir));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format generate output showing the written pages.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Home \u{2192} index.html".to_string()];
    let mut question_pages = 0;

    for (i, interview) in manifest.interviews.iter().enumerate() {
        let base = format!("interview/{}", interview.folder);
        lines.push(format!(
            "{} \u{2192} {}/index.html",
            interview_header(i + 1, interview, false),
            base
        ));
        for (j, question) in interview.questions.iter().enumerate() {
            lines.push(format!(
                "{}{} \u{2192} {}/{}/index.html",
                indent(1),
                question_line(j + 1, question),
                base,
                question.folder
            ));
            question_pages += 1;
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} interviews, {} question pages",
        manifest.interviews.len(),
        question_pages
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;
    use crate::test_helpers::{setup_fixtures, simple_content};

    #[test]
    fn format_index_padding() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn truncate_short_and_long() {
        assert_eq!(truncate("Short", 40), "Short");
        let text = "a".repeat(50);
        assert_eq!(truncate(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 3), "ééé...");
    }

    #[test]
    fn scan_output_lists_interviews_and_questions() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert_eq!(lines[0], "Interviews");
        assert_eq!(
            lines[1],
            "001 Lines and Silence \u{b7} Jane Doe (3 questions)"
        );
        assert_eq!(lines[2], "    Source: interviews/001-jane-doe/");
        assert!(lines.contains(&"    001 Draw your morning. [Drawing]".to_string()));
        assert!(lines.contains(&"        Images: morning.png".to_string()));
        assert!(lines.contains(&"        Text: response.txt".to_string()));
    }

    #[test]
    fn scan_output_shows_warnings_and_config() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        let warnings_at = lines.iter().position(|l| l == "Warnings").unwrap();
        assert!(lines[warnings_at + 1].starts_with("    002-sam-okafor: totalQuestions"));
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    assets/".to_string()));
    }

    #[test]
    fn scan_output_without_warnings_or_config() {
        let (tmp, _) = simple_content(1);
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest, tmp.path());

        assert!(!lines.iter().any(|l| l == "Warnings"));
        assert_eq!(lines.last().map(String::as_str), Some("Config"));
        assert_eq!(lines[1], "001 In conversation with Ana \u{b7} Ana (1 question)");
    }

    #[test]
    fn generate_output_lists_pages() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let lines = format_generate_output(&manifest);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(
            lines[1],
            "001 Lines and Silence \u{b7} Jane Doe \u{2192} interview/001-jane-doe/index.html"
        );
        assert_eq!(
            lines[2],
            "    001 Draw your morning. \u{2192} interview/001-jane-doe/question-1/index.html"
        );
        assert_eq!(
            lines.last().unwrap(),
            "Generated 3 interviews, 5 question pages"
        );
    }
}

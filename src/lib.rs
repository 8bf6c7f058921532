//! # Artbook
//!
//! A static site generator for illustrated artist interviews. Each interview
//! is a folder of questions, and each question folder holds the artist's
//! answer: a drawing, a handwritten note, a digital piece, or some mix of
//! images and text.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The manifest is human-readable JSON, so a broken build can be debugged by
//! reading what the scanner saw. `artbook check` runs the scan alone to
//! validate content before publishing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`schema`] | `metadata.json` shapes for interviews and questions |
//! | [`metadata`] | Folder enumeration and metadata lookup over the interviews directory |
//! | [`naming`] | `question-N` folder convention |
//! | [`scan`] | Stage 1: builds the manifest, validates content |
//! | [`generate`] | Stage 2: renders HTML with Maud |
//! | [`navigation`] | Keyboard, swipe, and zoom behaviour; per-page prev/next/overview links |
//! | [`progress`] | Page URL scheme and the visited-questions record |
//! | [`config`] | `config.toml` loading, validation, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Client-Side Behaviour
//!
//! Generated pages are plain HTML with one embedded script. The script
//! follows the page's `.nav-button` links on arrow keys and swipes, zooms
//! response images on click, and records visited questions in
//! `localStorage` so that overview pages can mark them. Its settings are
//! written into each page as JSON by [`navigation::ScriptConfig`]; the
//! script has no settings of its own.

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod progress;
pub mod scan;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_helpers;

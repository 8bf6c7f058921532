//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scan manifest and writes the final static
//! site.
//!
//! ## Generated Pages
//!
//! - **Index** (`/index.html`): one card per interview
//! - **Overview** (`/interview/{interview}/index.html`): the interview's
//!   questions as `.question-card` links, marked once visited
//! - **Question** (`/interview/{interview}/{question}/index.html`): the
//!   prompt, the artist's response, and previous / overview / next buttons
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── favicon.ico                         # from content/assets/
//! └── interview/
//!     └── 001-jane-doe/
//!         ├── index.html
//!         └── question-1/
//!             ├── index.html
//!             └── morning.png             # response files, copied as-is
//! ```
//!
//! ## CSS and JavaScript
//!
//! `static/style.css` is embedded at compile time and prefixed with the
//! color and layout custom properties from the config. Every page inlines it,
//! together with the navigation script and its JSON settings block (see
//! [`crate::navigation`]).

use crate::config;
use crate::navigation::{self, PageLinks, ScriptConfig};
use crate::progress::{encode_segment, interview_url, question_url};
use crate::scan::{self, Interview, Manifest, Question, TextFormat};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Everything shared by all pages of one site.
struct Site<'a> {
    title: &'a str,
    css: String,
    script_config: String,
}

/// Load the manifest written by the scan stage and render the site from it.
/// Returns the loaded manifest for reporting.
pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<Manifest, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, source_dir, output_dir)?;
    Ok(manifest)
}

/// Render and write the whole site for an already-loaded manifest.
pub fn generate_site(
    manifest: &Manifest,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let site_config = &manifest.config;
    let site = Site {
        title: &site_config.site_title,
        css: format!(
            "{}\n\n{}\n\n{}",
            config::generate_color_css(&site_config.colors),
            config::generate_theme_css(&site_config.theme),
            CSS_STATIC
        ),
        script_config: ScriptConfig::from_config(&site_config.navigation).to_embedded_json()?,
    };

    fs::create_dir_all(output_dir)?;

    let assets = source_dir.join(&site_config.assets_dir);
    if assets.is_dir() {
        copy_tree(&assets, output_dir)?;
    }

    fs::write(
        output_dir.join("index.html"),
        render_index(&manifest.interviews, &site).into_string(),
    )?;
    log::debug!("wrote index.html");

    let interviews_dir = source_dir.join(&site_config.interviews_dir);
    for interview in &manifest.interviews {
        let interview_out = output_dir
            .join(crate::progress::INTERVIEW_SEGMENT)
            .join(&interview.folder);
        fs::create_dir_all(&interview_out)?;

        let question_urls: Vec<String> = interview
            .questions
            .iter()
            .map(|q| question_url(&interview.folder, &q.folder))
            .collect();

        let overview_links = PageLinks::for_overview(&question_urls);
        let overview = render_overview(interview, &overview_links, &site);
        fs::write(interview_out.join("index.html"), overview.into_string())?;

        for (idx, question) in interview.questions.iter().enumerate() {
            let question_out = interview_out.join(&question.folder);
            fs::create_dir_all(&question_out)?;

            copy_response_files(
                &interviews_dir.join(&interview.folder).join(&question.folder),
                &question_out,
            )?;

            let overview_url = interview_url(&interview.folder);
            let links = PageLinks::for_question(&overview_url, &question_urls, idx);
            let page = render_question(interview, question, &links, &site);
            fs::write(question_out.join("index.html"), page.into_string())?;
        }
        log::debug!(
            "wrote {} question pages for {}",
            interview.questions.len(),
            interview.folder
        );
    }

    Ok(())
}

/// Copy every file under `src` into `dst`, keeping relative paths.
fn copy_tree(src: &Path, dst: &Path) -> Result<(), GenerateError> {
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Copy a question folder's files, except the ones the scanner consumes.
fn copy_response_files(src: &Path, dst: &Path) -> Result<(), GenerateError> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        if name_str.starts_with('.')
            || scan::is_reserved_file(&name_str)
            || !entry.file_type()?.is_file()
        {
            continue;
        }
        fs::copy(entry.path(), dst.join(&name))?;
    }
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
fn base_document(
    title: &str,
    site: &Site,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content="artbook";
                title { (title) }
                style { (PreEscaped(&site.css)) }
            }
            body class=[body_class] {
                (content)
                (navigation::render_script(&site.script_config))
            }
        }
    }
}

/// Renders the site header with breadcrumb.
fn site_header(site_title: &str, breadcrumb: Markup) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (site_title) }
            nav.breadcrumb {
                (breadcrumb)
            }
        }
    }
}

fn response_badge(question: &Question) -> Markup {
    let kind = question.metadata.response_type;
    html! {
        span class={ "badge badge-" (kind.as_str()) } { (kind.label()) }
    }
}

fn question_count(n: usize) -> String {
    match n {
        1 => "1 question".to_string(),
        n => format!("{n} questions"),
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page with one card per interview.
fn render_index(interviews: &[Interview], site: &Site) -> Markup {
    let content = html! {
        (site_header(site.title, html! {}))
        main.index-page {
            h1 { (site.title) }
            @if interviews.is_empty() {
                p.muted { "No interviews yet." }
            } @else {
                ul.interview-grid {
                    @for interview in interviews {
                        li.interview-card {
                            a href=(interview_url(&interview.folder)) {
                                h2 { (interview.metadata.interview_title) }
                                p.byline { (interview.metadata.artist_name) }
                                p.muted { (question_count(interview.questions.len())) }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(site.title, site, None, content)
}

/// Renders an interview overview with its question cards.
fn render_overview(interview: &Interview, links: &PageLinks, site: &Site) -> Markup {
    let meta = &interview.metadata;
    let breadcrumb = html! {
        a href="/" { "Interviews" }
        " › "
        (meta.artist_name)
    };

    let content = html! {
        (site_header(site.title, breadcrumb))
        main.overview-page {
            header.interview-header {
                h1 { (meta.interview_title) }
                p.byline { "with " (meta.artist_name) }
                @if let Some(desc) = &meta.description {
                    p.interview-description { (desc) }
                }
            }
            ol.question-list {
                @for question in &interview.questions {
                    li.question-card {
                        a href=(question_url(&interview.folder, &question.folder)) {
                            span.question-number { "Question " (question.metadata.question_number) }
                            " "
                            (response_badge(question))
                            p.question-text { (question.metadata.question) }
                        }
                    }
                }
            }
            (navigation::render_nav_buttons(links))
        }
    };

    let title = format!("{} · {}", meta.interview_title, meta.artist_name);
    base_document(&title, site, Some("overview-view"), content)
}

/// Renders a question page with the artist's response.
fn render_question(
    interview: &Interview,
    question: &Question,
    links: &PageLinks,
    site: &Site,
) -> Markup {
    let meta = &question.metadata;
    let artist = &interview.metadata.artist_name;
    let total = interview.questions.len();

    let breadcrumb = html! {
        a href="/" { "Interviews" }
        " › "
        a href=(interview_url(&interview.folder)) { (artist) }
        " › "
        "Question " (meta.question_number)
    };

    let image_count = question.images.len();
    let content = html! {
        (site_header(site.title, breadcrumb))
        main.question-page {
            p.question-meta {
                span.question-number { "Question " (meta.question_number) " of " (total) }
                " "
                (response_badge(question))
            }
            h1.question-prompt { (meta.question) }
            section.responses {
                @for (i, image) in question.images.iter().enumerate() {
                    @let alt = image_alt(artist, question, i, image_count);
                    @let src = encode_segment(&image.filename);
                    @if let Some((w, h)) = image.dimensions {
                        img.response-image src=(src) alt=(alt) width=(w) height=(h) loading="lazy";
                    } @else {
                        img.response-image src=(src) alt=(alt) loading="lazy";
                    }
                }
                @if let Some(text) = &question.text {
                    article.response-text {
                        @match text.format {
                            TextFormat::Markdown => {
                                (PreEscaped(markdown_to_html(&text.body)))
                            }
                            TextFormat::Plain => {
                                @for paragraph in plain_paragraphs(&text.body) {
                                    p { (paragraph) }
                                }
                            }
                        }
                    }
                }
            }
            (navigation::render_nav_buttons(links))
            p.keyboard-hint { "← → to move between questions · ↑ for the overview · Esc for home" }
        }
    };

    let title = format!("{} · Question {}", artist, meta.question_number);
    base_document(&title, site, Some("question-view"), content)
}

fn image_alt(artist: &str, question: &Question, index: usize, count: usize) -> String {
    let base = format!(
        "{}'s {} response to question {}",
        artist,
        question.metadata.response_type.as_str(),
        question.metadata.question_number
    );
    if count > 1 {
        format!("{base} ({} of {count})", index + 1)
    } else {
        base
    }
}

fn markdown_to_html(body: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(body));
    out
}

/// Split plain text on blank lines.
fn plain_paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.lines().map(str::trim).collect::<Vec<_>>().join(" "))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

//! Client-side navigation.
//!
//! The browser half lives in `static/navigation.js` and is embedded in every
//! generated page. It does four things:
//!
//! - **Keyboard**: arrow keys (and `h` / `l` / `k`) follow the page's
//!   previous / next / overview buttons, `Escape` goes home. Keys typed into
//!   inputs and text areas are left alone.
//! - **Swipe**: a mostly-horizontal touch gesture longer than the configured
//!   distance goes to the next question (swipe left) or the previous one
//!   (swipe right).
//! - **Zoom**: clicking a response image toggles `zoomed` on it and
//!   `image-zoomed` on `<body>`.
//! - **Progress**: visited questions are recorded and marked on overview
//!   pages, see [`crate::progress`].
//!
//! This module is the Rust half: the key map, the button each action follows,
//! and the previous / next / overview links for each page. The key map, the
//! button classes, and the enabled features are serialized into a
//! [`ScriptConfig`] JSON block that the script reads on load, so the script
//! itself carries no settings.

use crate::config::NavigationConfig;
use maud::{Markup, PreEscaped, html};
use serde::Serialize;
use std::collections::BTreeMap;

/// The embedded navigation script.
pub const SCRIPT: &str = include_str!("../static/navigation.js");

/// `id` of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "artbook-config";

/// Class the script toggles on a clicked response image.
pub const ZOOMED_CLASS: &str = "zoomed";
/// Class the script toggles on `<body>` while an image is zoomed.
pub const BODY_ZOOMED_CLASS: &str = "image-zoomed";
/// Class of zoomable response images.
pub const RESPONSE_IMAGE_CLASS: &str = "response-image";
/// Class the script adds to visited question cards.
pub const COMPLETED_CLASS: &str = "completed";

/// Where a navigation gesture leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    Previous,
    Next,
    Overview,
    Home,
}

impl NavAction {
    /// Buttons in the order they appear on the page.
    pub const BUTTONS: [NavAction; 3] = [
        NavAction::Previous,
        NavAction::Overview,
        NavAction::Next,
    ];

    /// CSS modifier of the `.nav-button` the action follows. `Home` has no
    /// button and always goes to `/`.
    pub fn button_class(self) -> Option<&'static str> {
        match self {
            NavAction::Previous => Some("prev"),
            NavAction::Next => Some("next"),
            NavAction::Overview => Some("overview"),
            NavAction::Home => None,
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            NavAction::Previous => "← Previous",
            NavAction::Next => "Next →",
            NavAction::Overview => "Overview",
            NavAction::Home => "Home",
        }
    }

    fn rel(self) -> Option<&'static str> {
        match self {
            NavAction::Previous => Some("prev"),
            NavAction::Next => Some("next"),
            _ => None,
        }
    }
}

/// Keyboard bindings, matched case-sensitively against `KeyboardEvent.key`.
pub const KEY_BINDINGS: &[(&str, NavAction)] = &[
    ("ArrowLeft", NavAction::Previous),
    ("h", NavAction::Previous),
    ("ArrowRight", NavAction::Next),
    ("l", NavAction::Next),
    ("ArrowUp", NavAction::Overview),
    ("k", NavAction::Overview),
    ("Escape", NavAction::Home),
];

/// Navigation targets of one page. `None` means the button is not rendered
/// and the matching key does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub overview: Option<String>,
}

impl PageLinks {
    /// Links for the question at `index` of an interview's question URLs.
    pub fn for_question(overview_url: &str, question_urls: &[String], index: usize) -> Self {
        Self {
            prev: index
                .checked_sub(1)
                .and_then(|i| question_urls.get(i))
                .cloned(),
            next: question_urls.get(index + 1).cloned(),
            overview: Some(overview_url.to_string()),
        }
    }

    /// Links for an interview overview page: next starts the interview,
    /// overview goes back to the interview list.
    pub fn for_overview(question_urls: &[String]) -> Self {
        Self {
            prev: None,
            next: question_urls.first().cloned(),
            overview: Some("/".to_string()),
        }
    }

    pub fn get(&self, action: NavAction) -> Option<&str> {
        match action {
            NavAction::Previous => self.prev.as_deref(),
            NavAction::Next => self.next.as_deref(),
            NavAction::Overview => self.overview.as_deref(),
            NavAction::Home => Some("/"),
        }
    }
}

/// Settings handed to the navigation script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptConfig {
    pub keyboard: bool,
    pub swipe: bool,
    pub image_zoom: bool,
    pub progress_tracking: bool,
    pub min_swipe_distance: u32,
    pub storage_key: String,
    pub key_bindings: BTreeMap<&'static str, NavAction>,
    /// `.nav-button` modifier per action; actions without one go home.
    pub buttons: BTreeMap<NavAction, &'static str>,
}

impl ScriptConfig {
    pub fn from_config(nav: &NavigationConfig) -> Self {
        Self {
            keyboard: nav.keyboard,
            swipe: nav.swipe,
            image_zoom: nav.image_zoom,
            progress_tracking: nav.progress_tracking,
            min_swipe_distance: nav.min_swipe_distance,
            storage_key: nav.progress_storage_key.clone(),
            key_bindings: KEY_BINDINGS.iter().copied().collect(),
            buttons: NavAction::BUTTONS
                .iter()
                .filter_map(|&action| Some((action, action.button_class()?)))
                .collect(),
        }
    }

    /// JSON safe to place inside a `<script>` element.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        // `</script>` inside a string value would close the element early.
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

/// Renders the previous / overview / next buttons the script follows.
pub fn render_nav_buttons(links: &PageLinks) -> Markup {
    html! {
        nav.page-nav {
            @for action in NavAction::BUTTONS {
                @if let (Some(href), Some(modifier)) = (links.get(action), action.button_class()) {
                    a class={ "nav-button " (modifier) } href=(href) rel=[action.rel()] {
                        (action.button_label())
                    }
                }
            }
        }
    }
}

/// Renders the config block followed by the script.
pub fn render_script(config_json: &str) -> Markup {
    html! {
        script type="application/json" id=(CONFIG_ELEMENT_ID) { (PreEscaped(config_json)) }
        script { (PreEscaped(SCRIPT)) }
    }
}

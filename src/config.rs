//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. User values are
//! layered over stock defaults, so a config file only needs the keys it
//! wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml              # Site config (optional)
//! ├── assets/
//! └── interviews/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! site_title = "Artbook"
//! interviews_dir = "interviews"   # Relative to the content root
//! assets_dir = "assets"           # Copied verbatim to the output root
//!
//! [navigation]
//! keyboard = true                 # Arrow keys / h, l, k / Escape
//! swipe = true                    # Horizontal swipe on touch screens
//! image_zoom = true               # Click a response image to zoom it
//! progress_tracking = true        # Remember visited questions in localStorage
//! min_swipe_distance = 50         # Pixels a swipe must exceed
//! progress_storage_key = "artbook-progress"
//!
//! [theme]
//! content_width = "48rem"
//! card_gap = "1rem"
//!
//! [colors.light]
//! background = "#fbfaf7"
//! text = "#1b1b1b"
//! text_muted = "#6b6b6b"
//! border = "#e4e0d8"
//! link = "#2f2f2f"
//! link_hover = "#000000"
//! accent = "#b5532f"              # Badges and completed-question marks
//!
//! [colors.dark]
//! background = "#121110"
//! text = "#ecebe8"
//! text_muted = "#9a9893"
//! border = "#34322e"
//! link = "#d0cec9"
//! link_hover = "#ffffff"
//! accent = "#e08a62"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Shown in the page header and the home page `<title>`.
    pub site_title: String,
    /// Directory holding interview folders, relative to the content root.
    pub interviews_dir: String,
    /// Static assets directory, copied to the output root if present.
    pub assets_dir: String,
    /// Client-side navigation behaviour.
    pub navigation: NavigationConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Artbook".to_string(),
            interviews_dir: "interviews".to_string(),
            assets_dir: "assets".to_string(),
            navigation: NavigationConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation.min_swipe_distance == 0 {
            return Err(ConfigError::Validation(
                "navigation.min_swipe_distance must be greater than 0".into(),
            ));
        }
        if self.navigation.progress_storage_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "navigation.progress_storage_key must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("interviews_dir", &self.interviews_dir),
            ("assets_dir", &self.assets_dir),
        ] {
            if !is_plain_relative(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a relative path inside the content directory, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Non-empty, relative, and free of `..` components.
fn is_plain_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Client-side navigation settings, serialized into every page for the
/// navigation script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    pub keyboard: bool,
    pub swipe: bool,
    pub image_zoom: bool,
    pub progress_tracking: bool,
    /// Horizontal travel in pixels a touch must strictly exceed to count as
    /// a swipe.
    pub min_swipe_distance: u32,
    /// `localStorage` key holding visited questions.
    pub progress_storage_key: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            keyboard: true,
            swipe: true,
            image_zoom: true,
            progress_tracking: true,
            min_swipe_distance: 50,
            progress_storage_key: "artbook-progress".to_string(),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the reading column (CSS value).
    pub content_width: String,
    /// Gap between cards on index and overview pages (CSS value).
    pub card_gap: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content_width: "48rem".to_string(),
            card_gap: "1rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: breadcrumbs, question numbers, artist bylines.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Response-type badges and completed-question marks.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fbfaf7".to_string(),
            text: "#1b1b1b".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#e4e0d8".to_string(),
            link: "#2f2f2f".to_string(),
            link_hover: "#000000".to_string(),
            accent: "#b5532f".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#121110".to_string(),
            text: "#ecebe8".to_string(),
            text_muted: "#9a9893".to_string(),
            border: "#34322e".to_string(),
            link: "#d0cec9".to_string(),
            link_hover: "#ffffff".to_string(),
            accent: "#e08a62".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("cannot serialize defaults: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content root.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Artbook Configuration
# =====================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Title shown in the header of every page.
site_title = "Artbook"

# Directory holding one folder per interview, relative to the content root.
interviews_dir = "interviews"

# Static files (favicon, fonts) copied verbatim to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[navigation]
# Arrow keys (or h / l / k) move between questions, Escape returns home.
keyboard = true

# Swipe left / right on touch screens for next / previous question.
swipe = true

# Click a response image to zoom it.
image_zoom = true

# Mark visited questions on overview pages (stored in the browser).
progress_tracking = true

# Pixels a horizontal swipe must exceed to count.
min_swipe_distance = 50

# Browser storage key for visited questions.
progress_storage_key = "artbook-progress"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
content_width = "48rem"
card_gap = "1rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fbfaf7"
text = "#1b1b1b"
text_muted = "#6b6b6b"
border = "#e4e0d8"
link = "#2f2f2f"
link_hover = "#000000"
accent = "#b5532f"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#121110"
text = "#ecebe8"
text_muted = "#9a9893"
border = "#34322e"
link = "#d0cec9"
link_hover = "#ffffff"
accent = "#e08a62"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_properties(&colors.light, "    "),
        dark = scheme_properties(&colors.dark, "        "),
    )
}

fn scheme_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-link", &scheme.link),
        ("--color-link-hover", &scheme.link_hover),
        ("--color-accent", &scheme.accent),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --content-width: {content_width};
    --card-gap: {card_gap};
}}"#,
        content_width = theme.content_width,
        card_gap = theme.card_gap,
    )
}

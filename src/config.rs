//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the source directory next to `assets/`:
//!
//! ```text
//! site/
//! ├── config.toml          # Overrides stock defaults
//! └── assets/
//!     ├── images/
//!     └── Amr_Ammory_CV.pdf
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_path = "/engineer-portfolio"  # Deployment prefix, also served as home
//! default_language = "en"            # "en" or "ar"
//!
//! [site]
//! cv_en = "Amr_Ammory_CV.pdf"        # Relative to the assets directory
//! cv_ar = "Amr_Ammory_CV_Arabic.pdf"
//!
//! [contact]
//! email = "amrammory13@gmail.com"
//! phone = "+963 983 952 896"
//! location = "Aleppo, Syria"
//! location_ar = "حلب، سوريا"
//! linkedin = "https://linkedin.com/in/amrammory"
//!
//! [contact_form]
//! reset_after_ms = 3000              # How long the thank-you message stays
//!
//! [layout]
//! max_width = "80rem"
//!
//! [layout.section_padding]
//! size = "8vw"
//! min = "3rem"
//! max = "6rem"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f8fafc"
//! text = "#0f172a"
//! text_muted = "#64748b"
//! border = "#e2e8f0"
//! accent = "#2563eb"
//! accent_hover = "#1d4ed8"
//!
//! [colors.dark]
//! background = "#0f172a"
//! surface = "#1e293b"
//! text = "#f1f5f9"
//! text_muted = "#94a3b8"
//! border = "#334155"
//! accent = "#60a5fa"
//! accent_hover = "#93c5fd"
//! ```
//!
//! Config files are sparse, and unknown keys are rejected to catch typos early.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
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
///
/// All fields have defaults matching the published portfolio. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Deployment prefix. The home page answers here as well as on `/`.
    pub base_path: String,
    /// Language shown before the visitor toggles.
    pub default_language: Language,
    pub site: SiteInfo,
    pub contact: ContactConfig,
    pub contact_form: ContactFormConfig,
    pub layout: LayoutConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/engineer-portfolio".to_string(),
            default_language: Language::En,
            site: SiteInfo::default(),
            contact: ContactConfig::default(),
            contact_form: ContactFormConfig::default(),
            layout: LayoutConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "base_path must start with '/'".into(),
            ));
        }
        if self.base_path.trim_end_matches('/').is_empty() {
            return Err(ConfigError::Validation(
                "base_path must not be '/' (the root is always served)".into(),
            ));
        }
        if self.base_path.contains(['?', '#', ' ', '\\']) {
            return Err(ConfigError::Validation(
                "base_path must be a plain path".into(),
            ));
        }
        // The prefix becomes a directory under the output root.
        let inner = self.base_path[1..]
            .strip_suffix('/')
            .unwrap_or(&self.base_path[1..]);
        if inner.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
            return Err(ConfigError::Validation(format!(
                "base_path must not contain empty, '.' or '..' segments: {}",
                self.base_path
            )));
        }
        if self.contact_form.reset_after_ms == 0 {
            return Err(ConfigError::Validation(
                "contact_form.reset_after_ms must be greater than 0".into(),
            ));
        }
        if self.site.cv_en.trim().is_empty() || self.site.cv_ar.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.cv_en and site.cv_ar must not be empty".into(),
            ));
        }
        if !self.contact.email.contains('@') {
            return Err(ConfigError::Validation(format!(
                "contact.email is not an email address: {}",
                self.contact.email
            )));
        }
        Ok(())
    }
}

/// CV downloads offered in the about section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// English CV, relative to the assets directory.
    pub cv_en: String,
    /// Arabic CV, relative to the assets directory.
    pub cv_ar: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            cv_en: "Amr_Ammory_CV.pdf".to_string(),
            cv_ar: "Amr_Ammory_CV_Arabic.pdf".to_string(),
        }
    }
}

/// Contact details shown in the contact section and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub location_ar: String,
    pub linkedin: String,
}

impl ContactConfig {
    pub fn location(&self, language: Language) -> &str {
        match language {
            Language::En => &self.location,
            Language::Ar => &self.location_ar,
        }
    }

    /// `tel:` URL with spaces removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "amrammory13@gmail.com".to_string(),
            phone: "+963 983 952 896".to_string(),
            location: "Aleppo, Syria".to_string(),
            location_ar: "حلب، سوريا".to_string(),
            linkedin: "https://linkedin.com/in/amrammory".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactFormConfig {
    /// Milliseconds the confirmation stays visible after a submission.
    pub reset_after_ms: u64,
}

impl ContactFormConfig {
    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            reset_after_ms: crate::contact::DEFAULT_RESET_AFTER.as_millis() as u64,
        }
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"8vw"`).
    pub size: String,
    pub min: String,
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Page layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Maximum width of section content (CSS value).
    pub max_width: String,
    /// Vertical padding of each section.
    pub section_padding: ClampSize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: "80rem".to_string(),
            section_padding: ClampSize {
                size: "8vw".to_string(),
                min: "3rem".to_string(),
                max: "6rem".to_string(),
            },
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
    /// Cards, navbar and form fields.
    pub surface: String,
    pub text: String,
    /// Subtitles, captions, card descriptions.
    pub text_muted: String,
    pub border: String,
    /// Buttons, links, skill bars.
    pub accent: String,
    pub accent_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f8fafc".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            accent: "#2563eb".to_string(),
            accent_hover: "#1d4ed8".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            text: "#f1f5f9".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#334155".to_string(),
            accent: "#60a5fa".to_string(),
            accent_hover: "#93c5fd".to_string(),
        }
    }

    fn css_variables(&self) -> String {
        format!(
            "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-border: {};\n    --color-accent: {};\n    --color-accent-hover: {};",
            self.background,
            self.surface,
            self.text,
            self.text_muted,
            self.border,
            self.accent,
            self.accent_hover,
        )
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
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
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

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        tracing::debug!(dir = %root.display(), "no config.toml, using stock defaults");
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Engineer Portfolio Configuration
# ================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Deployment prefix. The home page is written to both / and this path.
# Must start with "/" and must not be "/" itself.
base_path = "/engineer-portfolio"

# Language shown on first load: "en" or "ar".
default_language = "en"

# ---------------------------------------------------------------------------
# CV downloads (paths relative to the assets directory)
# ---------------------------------------------------------------------------
[site]
cv_en = "Amr_Ammory_CV.pdf"
cv_ar = "Amr_Ammory_CV_Arabic.pdf"

# ---------------------------------------------------------------------------
# Contact details (contact section and footer)
# ---------------------------------------------------------------------------
[contact]
email = "amrammory13@gmail.com"
phone = "+963 983 952 896"
location = "Aleppo, Syria"
location_ar = "حلب، سوريا"
linkedin = "https://linkedin.com/in/amrammory"

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact_form]
# How long the thank-you message stays visible, in milliseconds.
reset_after_ms = 3000

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Maximum width of section content (CSS value).
max_width = "80rem"

# Vertical section padding, as CSS clamp(min, size, max).
[layout.section_padding]
size = "8vw"
min = "3rem"
max = "6rem"

# ---------------------------------------------------------------------------
# Colors - Light mode
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f8fafc"       # Cards, navbar, form fields
text = "#0f172a"
text_muted = "#64748b"    # Subtitles, captions
border = "#e2e8f0"
accent = "#2563eb"        # Buttons, links, skill bars
accent_hover = "#1d4ed8"

# ---------------------------------------------------------------------------
# Colors - Dark mode (applied while the page root carries the "dark" class)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0f172a"
surface = "#1e293b"
text = "#f1f5f9"
text_muted = "#94a3b8"
border = "#334155"
accent = "#60a5fa"
accent_hover = "#93c5fd"
"##
}

/// Generate CSS custom properties from color config.
///
/// The dark palette is keyed on the root `dark` class, which the theme toggle
/// maintains, not on the system color scheme.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{light}\n}}\n\n:root.{dark_class} {{\n{dark}\n}}",
        light = colors.light.css_variables(),
        dark_class = crate::theme::DARK_CLASS,
        dark = colors.dark.css_variables(),
    )
}

/// Generate CSS custom properties from layout config.
pub fn generate_layout_css(layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --section-padding: {section_padding};
}}"#,
        max_width = layout.max_width,
        section_padding = layout.section_padding.to_css(),
    )
}

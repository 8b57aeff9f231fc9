//! HTML site generation.
//!
//! Renders the portfolio to a directory of static files that any file server
//! can host.
//!
//! ## Generated Files
//!
//! ```text
//! dist/
//! ├── index.html                   # Home page, served on /
//! ├── engineer-portfolio/
//! │   └── index.html               # Same page, served on the base path
//! ├── 404.html                     # Not-found page for every other path
//! ├── site.css                     # Base styles + colors from config.toml
//! ├── site.js                      # Language, theme, gallery, contact form
//! ├── images/                      # Copied from the assets directory
//! └── Amr_Ammory_CV.pdf
//! ```
//!
//! ## Both Languages In One Document
//!
//! Every page carries one `<div class="locale" lang=".." dir="..">` block per
//! language. The default language is visible, the other one is `hidden`;
//! `site.js` swaps them and updates `<html lang dir>`. Each block is rendered
//! with its own [`LanguageState`], so every label goes through the same
//! dictionary lookup. Element ids are prefixed with the language code
//! (`en-about`, `ar-about`) to stay unique.
//!
//! ## Error Boundary
//!
//! Page rendering runs under [`render_guarded`]. A panic while rendering a
//! page is caught and logged, and the page is replaced by a generic failure
//! view; the build itself still succeeds.
//!
//! ## Cache Busting
//!
//! URLs of `site.css`, `site.js` and every copied asset carry a `?v=` query
//! with the first 8 hex digits of the file's SHA-256.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::content::{self, NavLink};
use crate::gallery::{self, Filter, Gallery, GalleryError, GalleryImage, Lightbox};
use crate::i18n::{Key, Language};
use crate::language::LanguageState;
use crate::routes::{self, Route};
use crate::theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Gallery data error: {0}")]
    Gallery(#[from] GalleryError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

pub const STYLESHEET_FILE: &str = "site.css";
pub const SCRIPT_FILE: &str = "site.js";

/// A page written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub route: Route,
    /// Path relative to the output directory.
    pub file: String,
    /// True when rendering failed and the failure view was written instead.
    pub fallback: bool,
}

/// Summary of a generation run, consumed by the CLI output.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    /// Fingerprinted stylesheet and script URLs, e.g. `site.css?v=1a2b3c4d`.
    pub stylesheet: String,
    pub script: String,
    /// Copied asset paths, relative to the output directory.
    pub assets: Vec<String>,
    /// Referenced asset paths that the assets directory does not contain.
    pub missing_assets: Vec<String>,
}

impl GenerateReport {
    pub fn fallback_count(&self) -> usize {
        self.pages.iter().filter(|p| p.fallback).count()
    }
}

pub fn generate(
    config: &SiteConfig,
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let images = content::gallery_images();
    gallery::validate_images(&images)?;

    fs::create_dir_all(output_dir)?;

    let mut fingerprints = copy_assets(assets_dir, output_dir)?;
    let mut report = GenerateReport {
        assets: fingerprints.keys().cloned().collect(),
        missing_assets: missing_assets(config, &fingerprints),
        ..Default::default()
    };
    for path in &report.missing_assets {
        tracing::warn!(asset = %path, "referenced asset not found in {}", assets_dir.display());
    }

    let css = build_css(config);
    fs::write(output_dir.join(STYLESHEET_FILE), &css)?;
    fingerprints.insert(STYLESHEET_FILE.to_string(), fingerprint(css.as_bytes()));
    fs::write(output_dir.join(SCRIPT_FILE), JS)?;
    fingerprints.insert(SCRIPT_FILE.to_string(), fingerprint(JS.as_bytes()));

    let root_page = Page::new(config, &fingerprints, "");
    report.stylesheet = root_page.url(STYLESHEET_FILE);
    report.script = root_page.url(SCRIPT_FILE);

    for file in routes::home_files(&config.base_path) {
        let depth = file.matches('/').count();
        let page = Page::new(config, &fingerprints, &"../".repeat(depth));
        let gallery = Gallery::new(images.clone());
        let (markup, fallback) = render_guarded(
            Route::Home.name(),
            || render_home(&page, &gallery),
            || render_error_page(&page),
        );
        write_page(output_dir, &file, markup)?;
        report.pages.push(GeneratedPage {
            route: Route::Home,
            file,
            fallback,
        });
    }

    // Served for arbitrary paths, so URLs are absolute from the output root.
    let page = Page::new(config, &fingerprints, NOT_FOUND_ROOT);
    let (markup, fallback) = render_guarded(
        Route::NotFound.name(),
        || render_not_found(&page),
        || render_error_page(&page),
    );
    write_page(output_dir, Route::NotFound.output_file(), markup)?;
    report.pages.push(GeneratedPage {
        route: Route::NotFound,
        file: Route::NotFound.output_file().to_string(),
        fallback,
    });

    tracing::info!(
        pages = report.pages.len(),
        assets = report.assets.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

fn write_page(output_dir: &Path, file: &str, markup: Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(file, "wrote page");
    Ok(())
}

/// Run `render`, substituting `fallback` if it panics.
///
/// Returns the markup and whether the fallback was used.
pub fn render_guarded(
    page: &str,
    render: impl FnOnce() -> Markup,
    fallback: impl FnOnce() -> Markup,
) -> (Markup, bool) {
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(markup) => (markup, false),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(page, error = %message, "page failed to render, writing fallback view");
            (fallback(), true)
        }
    }
}

// ============================================================================
// Assets
// ============================================================================

/// Short content hash used for cache busting.
pub fn fingerprint(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .take(4)
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Copy the assets tree into the output directory.
///
/// Returns the fingerprint of every copied file, keyed by its `/`-separated
/// path relative to the output root. Dotfiles are skipped. A missing assets
/// directory is not an error.
fn copy_assets(
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<BTreeMap<String, String>, GenerateError> {
    let mut fingerprints = BTreeMap::new();
    if !assets_dir.is_dir() {
        tracing::debug!(dir = %assets_dir.display(), "no assets directory, nothing to copy");
        return Ok(fingerprints);
    }

    let walker = WalkDir::new(assets_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let dst = output_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst)?;
            continue;
        }

        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if key == STYLESHEET_FILE || key == SCRIPT_FILE || key.ends_with("index.html") || key == routes::NOT_FOUND_FILE {
            tracing::warn!(asset = %key, "asset is overwritten by a generated file");
        }
        let bytes = fs::read(entry.path())?;
        fs::write(&dst, &bytes)?;
        fingerprints.insert(key, fingerprint(&bytes));
    }
    Ok(fingerprints)
}

/// Every site-root path the rendered pages link to as a local asset.
pub fn referenced_assets(config: &SiteConfig) -> Vec<String> {
    let mut paths: Vec<String> = vec![
        HERO_BACKGROUND.to_string(),
        config.site.cv_en.clone(),
        config.site.cv_ar.clone(),
    ];
    for image in content::gallery_images() {
        paths.push(image.image.to_string());
        paths.push(image.thumbnail.to_string());
    }
    for project in content::PROJECTS {
        paths.push(project.image.to_string());
    }
    let mut paths: Vec<String> = paths
        .into_iter()
        .map(|p| p.trim_start_matches('/').to_string())
        .collect();
    paths.sort();
    paths.dedup();
    paths
}

fn missing_assets(config: &SiteConfig, copied: &BTreeMap<String, String>) -> Vec<String> {
    referenced_assets(config)
        .into_iter()
        .filter(|p| !copied.contains_key(p))
        .collect()
}

/// Result of validating a source directory without writing anything.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub key_count: usize,
    /// Images per filter choice, `All` first.
    pub gallery: Vec<(Filter, usize)>,
    pub home_files: Vec<String>,
    /// Referenced assets present in the assets directory.
    pub assets_found: Vec<String>,
    pub missing_assets: Vec<String>,
}

/// Validate gallery data and report which referenced assets exist.
pub fn check(config: &SiteConfig, assets_dir: &Path) -> Result<CheckReport, GenerateError> {
    let images = content::gallery_images();
    gallery::validate_images(&images)?;
    let (assets_found, missing_assets) = referenced_assets(config)
        .into_iter()
        .partition(|p| assets_dir.join(p).is_file());
    Ok(CheckReport {
        key_count: Key::ALL.len(),
        gallery: Gallery::new(images).counts(),
        home_files: routes::home_files(&config.base_path),
        assets_found,
        missing_assets,
    })
}

fn build_css(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    let layout_css = config::generate_layout_css(&config.layout);
    format!("{color_css}\n\n{layout_css}\n\n{CSS_STATIC}")
}

/// Applies the persisted theme before first paint, so dark mode never flashes.
fn theme_boot_script() -> String {
    format!(
        r#"(function(){{try{{if(JSON.parse(localStorage.getItem("{key}"))===true)document.documentElement.classList.add("{class}")}}catch(e){{}}}})();"#,
        key = theme::STORAGE_KEY,
        class = theme::DARK_CLASS,
    )
}

// ============================================================================
// Page context
// ============================================================================

/// URL prefix of the output root as seen from `404.html`.
const NOT_FOUND_ROOT: &str = "/";

const HERO_BACKGROUND: &str = "/images/hero-background.jpg";

/// Per-output-file rendering context.
struct Page<'a> {
    config: &'a SiteConfig,
    fingerprints: &'a BTreeMap<String, String>,
    /// Prefix turning a site-root path into a URL that resolves from this page.
    root: String,
}

impl<'a> Page<'a> {
    fn new(config: &'a SiteConfig, fingerprints: &'a BTreeMap<String, String>, root: &str) -> Self {
        Self {
            config,
            fingerprints,
            root: root.to_string(),
        }
    }

    /// URL of a local asset, with its fingerprint when known.
    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match self.fingerprints.get(path) {
            Some(hash) => format!("{}{path}?v={hash}", self.root),
            None => format!("{}{path}", self.root),
        }
    }

    /// Links to `#` or external URLs pass through unchanged.
    fn href(&self, link: &str) -> String {
        if link.starts_with('/') {
            self.url(link)
        } else {
            link.to_string()
        }
    }

    fn home(&self) -> String {
        if self.root.is_empty() {
            "./".to_string()
        } else {
            self.root.clone()
        }
    }
}

/// Id of a section or control, unique across both locale blocks.
fn anchor(t: &LanguageState, name: &str) -> String {
    format!("{}-{name}", t.language().code())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(page: &Page, title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    let language = page.config.default_language;
    html! {
        (DOCTYPE)
        html lang=(language.code()) dir=(language.dir())
            data-default-lang=(language.code())
            data-storage-key=(theme::STORAGE_KEY)
            data-dark-class=(theme::DARK_CLASS) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script { (PreEscaped(theme_boot_script())) }
                link rel="stylesheet" href=(page.url(STYLESHEET_FILE));
            }
            body class=[body_class] {
                (content)
                script src=(page.url(SCRIPT_FILE)) defer {}
            }
        }
    }
}

/// One block per language, only the default one visible.
fn locales(page: &Page, render: impl Fn(&LanguageState) -> Markup) -> Markup {
    let default = page.config.default_language;
    html! {
        @for language in Language::ALL {
            @let t = LanguageState::new(language);
            div.locale lang=(language.code()) dir=(language.dir()) hidden[language != default] {
                (render(&t))
            }
        }
    }
}

fn page_title(language: Language) -> String {
    let t = LanguageState::new(language);
    format!("{} | {}", t.lookup(Key::HeroName), t.lookup(Key::HeroRole))
}

fn nav_link(t: &LanguageState, link: &NavLink) -> Markup {
    html! {
        a href={ "#" (anchor(t, link.anchor)) } { (t.lookup(link.label)) }
    }
}

fn section_header(t: &LanguageState, title: Key, subtitle: Option<Key>) -> Markup {
    html! {
        header.section-header {
            h2.section-title { (t.lookup(title)) }
            @if let Some(subtitle) = subtitle {
                p.section-subtitle { (t.lookup(subtitle)) }
            }
        }
    }
}

/// Top bar with section links, language and theme toggles, and a
/// checkbox-driven mobile menu.
fn navbar(t: &LanguageState) -> Markup {
    let toggle_id = anchor(t, "nav-toggle");
    html! {
        header.navbar {
            div.container.navbar-inner {
                a.brand href={ "#" (anchor(t, "home")) } { (t.lookup(Key::HeroName)) }
                input.nav-toggle type="checkbox" id=(toggle_id);
                label.nav-hamburger for=(toggle_id) aria-label=(t.lookup(Key::NavOpenMenu)) {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                nav.nav-panel {
                    ul.nav-links {
                        @for link in content::NAV_LINKS {
                            li { (nav_link(t, link)) }
                        }
                    }
                    div.nav-actions {
                        button.nav-button type="button" data-action="toggle-language"
                            lang=(t.language().toggled().code()) {
                            (t.lookup(Key::NavSwitchLanguage))
                        }
                        button.nav-button.theme-toggle type="button" data-action="toggle-theme"
                            aria-label=(t.lookup(Key::NavToggleTheme)) title=(t.lookup(Key::NavToggleTheme)) {
                            span.icon-moon aria-hidden="true" { "☾" }
                            span.icon-sun aria-hidden="true" { "☀" }
                        }
                        a.button.primary href={ "#" (anchor(t, "contact")) } { (t.lookup(Key::NavContactMe)) }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

fn hero(page: &Page, t: &LanguageState) -> Markup {
    let background = format!("background-image: url('{}');", page.url(HERO_BACKGROUND));
    html! {
        section.hero id=(anchor(t, "home")) style=(background) {
            div.container.hero-content {
                h1.hero-name { (t.lookup(Key::HeroName)) }
                p.hero-role { (t.lookup(Key::HeroRole)) }
                p.hero-tagline { (t.lookup(Key::HeroTagline)) }
                div.hero-actions {
                    a.button.primary href={ "#" (anchor(t, "gallery")) } { (t.lookup(Key::HeroViewWork)) }
                    a.button.secondary href={ "#" (anchor(t, "contact")) } { (t.lookup(Key::HeroGetInTouch)) }
                }
            }
        }
    }
}

fn about(page: &Page, t: &LanguageState) -> Markup {
    let cv_en = &page.config.site.cv_en;
    let cv_ar = &page.config.site.cv_ar;
    html! {
        section.section.about id=(anchor(t, "about")) {
            div.container {
                (section_header(t, Key::AboutTitle, None))
                p.about-description { (t.lookup(Key::AboutDescription)) }
                div.cv-downloads {
                    a.button.primary href=(page.url(cv_en)) download=(cv_en) { (t.lookup(Key::AboutDownloadCvEn)) }
                    a.button.secondary href=(page.url(cv_ar)) download=(cv_ar) { (t.lookup(Key::AboutDownloadCvAr)) }
                }
                div.stats-grid {
                    @for stat in content::STATS {
                        div.card.stat-card {
                            span.stat-value { (stat.value) }
                            h3.stat-label { (t.lookup(stat.label)) }
                            p.stat-description { (t.lookup(stat.description)) }
                        }
                    }
                }
                div.highlights-grid {
                    @for highlight in content::ABOUT_HIGHLIGHTS {
                        div.card.highlight-card {
                            h3 { (t.lookup(highlight.title)) }
                            p { (t.lookup(highlight.description)) }
                        }
                    }
                }
            }
        }
    }
}

fn certification_card(t: &LanguageState, cert: &content::Certification) -> Markup {
    html! {
        div.card.certification-card {
            h4 { (t.lookup(cert.title)) }
            p.issuer { (t.lookup(cert.issuer)) }
            @if let Some(description) = cert.description {
                p { (t.lookup(description)) }
            }
            @if cert.verified {
                span.badge.verified { "✓ " (t.lookup(Key::ServicesVerified)) }
            }
        }
    }
}

fn services(t: &LanguageState) -> Markup {
    html! {
        section.section.services id=(anchor(t, "services")) {
            div.container {
                (section_header(t, Key::ServicesTitle, Some(Key::ServicesSubtitle)))
                div.services-grid {
                    @for service in content::SERVICES {
                        div.card.service-card {
                            h3 { (t.lookup(service.title)) }
                            p { (t.lookup(service.description)) }
                            div.service-stats {
                                span.service-stat { (t.lookup(service.stat)) }
                                span.service-achievement { (t.lookup(service.achievement)) }
                            }
                        }
                    }
                }
                h3.subsection-title { (t.lookup(Key::ServicesCertifications)) }
                div.certifications-grid {
                    @for cert in content::SERVICE_CERTIFICATIONS {
                        (certification_card(t, cert))
                    }
                }
                h3.subsection-title { (t.lookup(Key::ServicesWhyChoose)) }
                div.highlights-grid {
                    @for reason in content::WHY_CHOOSE {
                        div.card.highlight-card {
                            h4 { (t.lookup(reason.title)) }
                            p { (t.lookup(reason.description)) }
                        }
                    }
                }
            }
        }
    }
}

fn skills(t: &LanguageState) -> Markup {
    let language = t.language();
    html! {
        section.section.skills id=(anchor(t, "skills")) {
            div.container {
                (section_header(t, Key::SkillsTitle, Some(Key::SkillsSubtitle)))
                div.skills-grid {
                    @for category in content::SKILL_CATEGORIES {
                        div.card.skill-category {
                            h3 { (t.lookup(category.title)) }
                            @for skill in category.skills {
                                div.skill {
                                    div.skill-header {
                                        span.skill-name { (skill.name.get(language)) }
                                        span.skill-level { (skill.level) "%" }
                                    }
                                    div.skill-bar {
                                        div class={ "skill-fill " (skill.tier()) }
                                            style={ "width: " (skill.level) "%;" } {}
                                    }
                                }
                            }
                        }
                    }
                }
                div.card.spoken-languages {
                    h3 { (t.lookup(Key::SkillsLanguages)) }
                    ul {
                        @for (name, level) in content::SPOKEN_LANGUAGES {
                            li {
                                span.language-name { (t.lookup(*name)) }
                                span.language-level { (t.lookup(*level)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn gallery_item(page: &Page, t: &LanguageState, index: usize, image: &GalleryImage) -> Markup {
    let language = t.language();
    let title = image.title.get(language);
    html! {
        figure.gallery-item
            data-id=(image.id)
            data-index=(index)
            data-category=(image.category.slug())
            data-image=(page.url(image.image))
            data-title=(title)
            data-description=(image.description.get(language))
            data-tags=(image.tags.join(", "))
            data-project=[image.project_link.map(|l| page.href(l))]
            data-drive=[image.drive_link.map(|l| page.href(l))] {
            button.gallery-open type="button" aria-label=(format!("{}: {title}", t.lookup(Key::GalleryViewDetails))) {
                img src=(page.url(image.thumbnail)) alt=(title) loading="lazy";
            }
            figcaption {
                span.gallery-category { (t.lookup(image.category.label())) }
                h3 { (title) }
                @if !image.tags.is_empty() {
                    ul.tags {
                        @for tag in image.tags {
                            li { (tag) }
                        }
                    }
                }
            }
        }
    }
}

/// Lightbox dialog. Rendered with the gallery's current state; `site.js`
/// drives it from there.
fn lightbox(page: &Page, t: &LanguageState, gallery: &Gallery) -> Markup {
    let language = t.language();
    let selected = gallery.selected_image();
    html! {
        div.lightbox role="dialog" aria-modal="true"
            aria-label=(t.lookup(Key::GalleryTitle))
            hidden[gallery.lightbox() == Lightbox::Closed] {
            button.lightbox-close type="button" data-action="close" aria-label=(t.lookup(Key::GalleryClose)) { "×" }
            button.lightbox-prev type="button" data-action="prev" aria-label=(t.lookup(Key::GalleryPrevious)) { "‹" }
            figure.lightbox-figure {
                img.lightbox-image
                    src=[selected.map(|i| page.url(i.image))]
                    alt=[selected.map(|i| i.title.get(language))];
                figcaption {
                    h3.lightbox-title { @if let Some(image) = selected { (image.title.get(language)) } }
                    p.lightbox-description { @if let Some(image) = selected { (image.description.get(language)) } }
                    p.lightbox-tags { @if let Some(image) = selected { (image.tags.join(", ")) } }
                    div.lightbox-links {
                        a.button.secondary.lightbox-project target="_blank" rel="noopener"
                            href=[selected.and_then(|i| i.project_link).map(|l| page.href(l))]
                            hidden[selected.and_then(|i| i.project_link).is_none()] {
                            (t.lookup(Key::GalleryViewProject))
                        }
                        a.button.primary.lightbox-download target="_blank" rel="noopener"
                            href=[selected.and_then(|i| i.drive_link).map(|l| page.href(l))]
                            hidden[selected.and_then(|i| i.drive_link).is_none()] {
                            (t.lookup(Key::GalleryDownload))
                        }
                    }
                    span.lightbox-counter aria-live="polite" { (gallery.counter().unwrap_or_default()) }
                }
            }
            button.lightbox-next type="button" data-action="next" aria-label=(t.lookup(Key::GalleryNext)) { "›" }
        }
    }
}

fn gallery_section(page: &Page, t: &LanguageState, gallery: &Gallery) -> Markup {
    let active = gallery.filter();
    let counts: BTreeMap<&str, usize> = gallery
        .counts()
        .into_iter()
        .map(|(filter, count)| (filter.slug(), count))
        .collect();
    html! {
        section.section.gallery id=(anchor(t, "gallery")) data-gallery {
            div.container {
                (section_header(t, Key::GalleryTitle, Some(Key::GallerySubtitle)))
                div.gallery-filters role="group" {
                    @for filter in gallery.categories() {
                        @let is_active = filter == active;
                        button.filter-button.active[is_active] type="button"
                            data-filter=(filter.slug())
                            aria-pressed=(if is_active { "true" } else { "false" }) {
                            (t.lookup(filter.label()))
                            " "
                            span.filter-count { (counts.get(filter.slug()).copied().unwrap_or(0)) }
                        }
                    }
                }
                div.gallery-grid {
                    @for (index, image) in gallery.filtered().into_iter().enumerate() {
                        (gallery_item(page, t, index, image))
                    }
                }
                p.gallery-empty hidden[gallery.filtered_len() > 0] { (t.lookup(Key::GalleryEmpty)) }
                (lightbox(page, t, gallery))
            }
        }
    }
}

fn projects(page: &Page, t: &LanguageState) -> Markup {
    let language = t.language();
    html! {
        section.section.projects id=(anchor(t, "projects")) {
            div.container {
                (section_header(t, Key::ProjectsTitle, Some(Key::ProjectsSubtitle)))
                div.projects-grid {
                    @for project in content::PROJECTS {
                        article.card.project-card {
                            img src=(page.url(project.image)) alt=(t.lookup(project.title)) loading="lazy";
                            div.project-body {
                                span.project-category { (project.category.get(language)) }
                                h3 { (t.lookup(project.title)) }
                                p { (t.lookup(project.description)) }
                                ul.tags {
                                    @for tech in project.technologies {
                                        li { (tech) }
                                    }
                                }
                                @if let Some(link) = project.link {
                                    a.button.secondary href=(page.href(link)) target="_blank" rel="noopener" {
                                        (t.lookup(Key::ProjectsViewProject))
                                    }
                                }
                            }
                        }
                    }
                }
                div.card.cta {
                    h3 { (t.lookup(Key::ProjectsInterested)) }
                    p { (t.lookup(Key::ProjectsInterestedDesc)) }
                    a.button.primary href={ "#" (anchor(t, "contact")) } { (t.lookup(Key::HeroGetInTouch)) }
                }
            }
        }
    }
}

fn experience(t: &LanguageState) -> Markup {
    html! {
        section.section.experience id=(anchor(t, "experience")) {
            div.container {
                (section_header(t, Key::ExperienceTitle, None))
                ol.timeline {
                    @for job in content::EXPERIENCE {
                        li.timeline-item {
                            div.card {
                                h3 { (t.lookup(job.title)) }
                                p.company { (t.lookup(job.company)) }
                                p { (t.lookup(job.description)) }
                                ul.highlights {
                                    @for highlight in job.highlights {
                                        li { (t.lookup(*highlight)) }
                                    }
                                }
                            }
                        }
                    }
                }
                h3.subsection-title { (t.lookup(Key::ExperienceCertifications)) }
                div.certifications-grid {
                    @for cert in content::EXPERIENCE_CERTIFICATIONS {
                        (certification_card(t, cert))
                    }
                }
                h3.subsection-title { (t.lookup(Key::ExperienceEducation)) }
                ul.education {
                    @for entry in content::EDUCATION {
                        li.card { (t.lookup(*entry)) }
                    }
                }
            }
        }
    }
}

fn contact(page: &Page, t: &LanguageState) -> Markup {
    let info = &page.config.contact;
    let field = |name: &str| anchor(t, &format!("contact-{name}"));
    html! {
        section.section.contact id=(anchor(t, "contact")) {
            div.container {
                (section_header(t, Key::ContactTitle, Some(Key::ContactSubtitle)))
                div.contact-grid {
                    div.card.contact-info {
                        h3 { (t.lookup(Key::ContactInfo)) }
                        dl {
                            dt { (t.lookup(Key::ContactEmailLabel)) }
                            dd { a href=(info.email_href()) { (info.email) } }
                            dt { (t.lookup(Key::ContactPhoneLabel)) }
                            dd { a href=(info.phone_href()) dir="ltr" { (info.phone) } }
                            dt { (t.lookup(Key::ContactLocationLabel)) }
                            dd { (info.location(t.language())) }
                        }
                        h3 { (t.lookup(Key::ContactConnectWithMe)) }
                        div.social-links {
                            a href=(info.linkedin) target="_blank" rel="noopener" { "LinkedIn" }
                            a href=(info.email_href()) { (t.lookup(Key::ContactEmailLabel)) }
                        }
                    }
                    div.card.contact-form-card {
                        h3 { (t.lookup(Key::ContactSendMessage)) }
                        form.contact-form data-reset-after=(page.config.contact_form.reset_after_ms) {
                            div.field {
                                label for=(field("name")) { (t.lookup(Key::ContactNameField)) }
                                input id=(field("name")) name="name" type="text" required
                                    placeholder=(t.lookup(Key::ContactName));
                            }
                            div.field {
                                label for=(field("email")) { (t.lookup(Key::ContactEmailField)) }
                                input id=(field("email")) name="email" type="email" required
                                    placeholder=(t.lookup(Key::ContactEmail));
                            }
                            div.field {
                                label for=(field("subject")) { (t.lookup(Key::ContactSubjectField)) }
                                input id=(field("subject")) name="subject" type="text" required
                                    placeholder=(t.lookup(Key::ContactSubject));
                            }
                            div.field {
                                label for=(field("message")) { (t.lookup(Key::ContactMessageField)) }
                                textarea id=(field("message")) name="message" rows="5" required
                                    placeholder=(t.lookup(Key::ContactMessage)) {}
                            }
                            button.button.primary type="submit" { (t.lookup(Key::ContactSend)) }
                        }
                        p.contact-thanks role="status" hidden { (t.lookup(Key::ContactThanks)) }
                    }
                }
            }
        }
    }
}

fn footer(page: &Page, t: &LanguageState) -> Markup {
    let info = &page.config.contact;
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div {
                    h3 { (t.lookup(Key::HeroName)) }
                    p { (t.lookup(Key::FooterBio)) }
                }
                div {
                    h4 { (t.lookup(Key::FooterQuickLinks)) }
                    ul {
                        @for link in content::FOOTER_LINKS {
                            li { (nav_link(t, link)) }
                        }
                    }
                }
                div {
                    h4 { (t.lookup(Key::FooterContact)) }
                    ul {
                        li { a href=(info.email_href()) { (info.email) } }
                        li { a href=(info.phone_href()) dir="ltr" { (info.phone) } }
                        li { a href=(info.linkedin) target="_blank" rel="noopener" { "LinkedIn" } }
                    }
                }
            }
            div.container.footer-bottom {
                p { "© " (t.lookup(Key::HeroName)) ". " (t.lookup(Key::FooterCopyright)) }
                p { (t.lookup(Key::FooterDesigned)) }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the single-page portfolio, every section in every language.
fn render_home(page: &Page, gallery: &Gallery) -> Markup {
    let content = locales(page, |t| {
        html! {
            (navbar(t))
            main {
                (hero(page, t))
                (about(page, t))
                (services(t))
                (skills(t))
                (gallery_section(page, t, gallery))
                (projects(page, t))
                (experience(t))
                (contact(page, t))
            }
            (footer(page, t))
        }
    });
    base_document(page, &page_title(page.config.default_language), None, content)
}

fn render_not_found(page: &Page) -> Markup {
    let content = locales(page, |t| {
        html! {
            main.fallback-page {
                p.fallback-code { "404" }
                h1 { (t.lookup(Key::NotFoundTitle)) }
                p { (t.lookup(Key::NotFoundMessage)) }
                div.fallback-actions {
                    a.button.primary href=(page.home()) { (t.lookup(Key::NotFoundBackHome)) }
                    button.nav-button type="button" data-action="toggle-language" lang=(t.language().toggled().code()) {
                        (t.lookup(Key::NavSwitchLanguage))
                    }
                }
            }
        }
    });
    let title = LanguageState::new(page.config.default_language).lookup(Key::NotFoundTitle);
    base_document(page, title, Some("fallback"), content)
}

/// Generic failure view written in place of a page that failed to render.
fn render_error_page(page: &Page) -> Markup {
    let content = locales(page, |t| {
        html! {
            main.fallback-page role="alert" {
                h1 { (t.lookup(Key::ErrorTitle)) }
                p { (t.lookup(Key::ErrorMessage)) }
                div.fallback-actions {
                    button.button.primary type="button" data-action="reload" { (t.lookup(Key::ErrorReload)) }
                    a.button.secondary href=(page.home()) { (t.lookup(Key::NotFoundBackHome)) }
                }
            }
        }
    });
    let title = LanguageState::new(page.config.default_language).lookup(Key::ErrorTitle);
    base_document(page, title, Some("fallback"), content)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Category;
    use crate::test_helpers::{gallery_image, locale_block, read_output, setup_source};

    fn render<F: FnOnce(&Page) -> Markup>(config: &SiteConfig, f: F) -> String {
        let fingerprints = BTreeMap::new();
        let page = Page::new(config, &fingerprints, "");
        f(&page).into_string()
    }

    fn home_html(config: &SiteConfig) -> String {
        let gallery = Gallery::new(content::gallery_images());
        render(config, |page| render_home(page, &gallery))
    }

    // =========================================================================
    // Locale blocks
    // =========================================================================

    #[test]
    fn home_has_one_block_per_language() {
        let html = home_html(&SiteConfig::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="locale" lang="en" dir="ltr">"#));
        assert!(html.contains(r#"<div class="locale" lang="ar" dir="rtl" hidden>"#));
        assert!(html.contains(r#"<html lang="en" dir="ltr""#));
    }

    #[test]
    fn default_language_controls_visible_block() {
        let config = SiteConfig {
            default_language: Language::Ar,
            ..SiteConfig::default()
        };
        let html = home_html(&config);
        assert!(html.contains(r#"<html lang="ar" dir="rtl""#));
        assert!(html.contains(r#"<div class="locale" lang="en" dir="ltr" hidden>"#));
        assert!(html.contains(r#"<div class="locale" lang="ar" dir="rtl">"#));
    }

    #[test]
    fn each_block_uses_its_own_translations() {
        let html = home_html(&SiteConfig::default());
        let en = locale_block(&html, "en");
        let ar = locale_block(&html, "ar");
        assert!(en.contains(">About Me<"));
        assert!(!en.contains("نبذة عني"));
        assert!(ar.contains("نبذة عني"));
        assert!(!ar.contains(">About Me<"));
    }

    #[test]
    fn section_ids_are_prefixed_per_language() {
        let html = home_html(&SiteConfig::default());
        for link in content::NAV_LINKS {
            assert!(html.contains(&format!(r#"id="en-{}""#, link.anchor)), "{}", link.anchor);
            assert!(html.contains(&format!(r#"id="ar-{}""#, link.anchor)), "{}", link.anchor);
        }
        assert!(html.contains(r##"href="#ar-gallery""##));
    }

    #[test]
    fn theme_contract_is_exposed_to_script() {
        let html = home_html(&SiteConfig::default());
        assert!(html.contains(r#"data-storage-key="darkMode""#));
        assert!(html.contains(r#"data-dark-class="dark""#));
        assert!(html.contains(r#"localStorage.getItem("darkMode")"#));
        assert!(html.contains(r#"data-action="toggle-theme""#));
        assert!(html.contains(r#"data-action="toggle-language""#));
    }

    // =========================================================================
    // Sections
    // =========================================================================

    #[test]
    fn gallery_renders_filters_items_and_closed_lightbox() {
        let html = home_html(&SiteConfig::default());
        let en = locale_block(&html, "en");
        assert!(en.contains(r#"class="filter-button active" type="button" data-filter="all" aria-pressed="true""#));
        assert!(en.contains(r#"data-filter="technical-documentation""#));
        assert_eq!(en.matches(r#"class="gallery-item""#).count(), 6);
        assert!(en.contains(r#"data-category="fea-analysis""#));
        assert!(en.contains(
            r#"<div class="lightbox" role="dialog" aria-modal="true" aria-label="Engineering Portfolio Gallery" hidden>"#
        ));
    }

    #[test]
    fn gallery_filter_counts() {
        let html = home_html(&SiteConfig::default());
        let en = locale_block(&html, "en");
        // 6 images: 3 CAD, 2 FEA, 1 documentation
        assert!(en.contains(r#"<span class="filter-count">6</span>"#));
        assert!(en.contains(r#"<span class="filter-count">3</span>"#));
        assert!(en.contains(r#"<span class="filter-count">2</span>"#));
        assert!(en.contains(r#"<span class="filter-count">1</span>"#));
    }

    #[test]
    fn lightbox_reflects_open_state() {
        let config = SiteConfig::default();
        let mut gallery = Gallery::new(vec![
            gallery_image("a", Category::CadDesign),
            gallery_image("b", Category::FeaAnalysis),
        ]);
        assert!(gallery.open(1));
        let html = render(&config, |page| {
            let t = LanguageState::new(Language::En);
            lightbox(page, &t, &gallery)
        });
        assert!(html.contains(
            r#"<div class="lightbox" role="dialog" aria-modal="true" aria-label="Engineering Portfolio Gallery">"#
        ));
        assert!(html.contains(r#"<span class="lightbox-counter" aria-live="polite">2 / 2</span>"#));
        assert!(html.contains(r#"<h3 class="lightbox-title">b</h3>"#));
    }

    #[test]
    fn empty_filter_shows_empty_message() {
        let config = SiteConfig::default();
        let mut gallery = Gallery::new(vec![gallery_image("a", Category::CadDesign)]);
        gallery.set_filter(Filter::Only(Category::TechnicalDocumentation));
        let html = render(&config, |page| {
            let t = LanguageState::new(Language::En);
            gallery_section(page, &t, &gallery)
        });
        assert!(html.contains(r#"<p class="gallery-empty">"#));
        assert!(!html.contains(r#"class="gallery-item""#));
    }

    #[test]
    fn contact_form_carries_reset_delay_and_details() {
        let mut config = SiteConfig::default();
        config.contact_form.reset_after_ms = 4500;
        config.contact.email = "me@example.org".into();
        let html = home_html(&config);
        assert!(html.contains(r#"data-reset-after="4500""#));
        assert!(html.contains(r#"href="mailto:me@example.org""#));
        assert!(html.contains(r#"id="ar-contact-email""#));
        assert!(html.contains(r#"<p class="contact-thanks" role="status" hidden>"#));
    }

    #[test]
    fn contact_location_is_localized() {
        let html = home_html(&SiteConfig::default());
        assert!(locale_block(&html, "en").contains("Aleppo, Syria"));
        assert!(locale_block(&html, "ar").contains("حلب، سوريا"));
    }

    #[test]
    fn cv_links_use_config() {
        let mut config = SiteConfig::default();
        config.site.cv_en = "cv/en.pdf".into();
        let html = home_html(&config);
        assert!(html.contains(r#"href="cv/en.pdf" download="cv/en.pdf""#));
    }

    #[test]
    fn skill_bars_have_width_and_tier() {
        let html = home_html(&SiteConfig::default());
        assert!(html.contains(r#"<div class="skill-fill expert" style="width: 95%;">"#));
        assert!(html.contains(r#"<div class="skill-fill advanced" style="width: 80%;">"#));
    }

    // =========================================================================
    // URLs
    // =========================================================================

    #[test]
    fn page_url_applies_root_and_fingerprint() {
        let config = SiteConfig::default();
        let mut fingerprints = BTreeMap::new();
        fingerprints.insert("images/a.jpg".to_string(), "deadbeef".to_string());
        let page = Page::new(&config, &fingerprints, "../");
        assert_eq!(page.url("/images/a.jpg"), "../images/a.jpg?v=deadbeef");
        assert_eq!(page.url("/images/b.jpg"), "../images/b.jpg");
        assert_eq!(page.href("#"), "#");
        assert_eq!(page.href("https://example.com"), "https://example.com");
        assert_eq!(page.home(), "../");
    }

    #[test]
    fn fingerprint_is_short_and_stable() {
        let a = fingerprint(b"body {}");
        assert_eq!(a.len(), 8);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, fingerprint(b"body {}"));
        assert_ne!(a, fingerprint(b"body { }"));
    }

    #[test]
    fn referenced_assets_are_relative_and_unique() {
        let assets = referenced_assets(&SiteConfig::default());
        assert!(assets.contains(&"Amr_Ammory_CV.pdf".to_string()));
        assert!(assets.contains(&"images/hero-bg.png".to_string()));
        assert!(assets.iter().all(|p| !p.starts_with('/')));
        let mut deduped = assets.clone();
        deduped.dedup();
        assert_eq!(deduped, assets);
    }

    #[test]
    fn check_reports_missing_assets() {
        let tmp = tempfile::TempDir::new().unwrap();
        fs::write(tmp.path().join("Amr_Ammory_CV.pdf"), b"pdf").unwrap();
        let report = check(&SiteConfig::default(), tmp.path()).unwrap();
        assert_eq!(report.assets_found, vec!["Amr_Ammory_CV.pdf"]);
        assert!(report.missing_assets.contains(&"Amr_Ammory_CV_Arabic.pdf".to_string()));
        assert_eq!(report.gallery[0], (Filter::All, 6));
        assert_eq!(report.key_count, Key::ALL.len());
        assert_eq!(
            report.home_files,
            vec!["index.html", "engineer-portfolio/index.html"]
        );
    }

    // =========================================================================
    // Fallback pages and error boundary
    // =========================================================================

    #[test]
    fn not_found_page_links_home() {
        let config = SiteConfig::default();
        let fingerprints = BTreeMap::new();
        let page = Page::new(&config, &fingerprints, NOT_FOUND_ROOT);
        let html = render_not_found(&page).into_string();
        assert!(html.contains("<title>Page Not Found</title>"));
        assert!(html.contains("الصفحة غير موجودة"));
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/site.css""#));
        assert!(html.contains(r#"src="/site.js""#));
    }

    #[test]
    fn error_page_offers_reload() {
        let html = render(&SiteConfig::default(), |page| render_error_page(page));
        assert!(html.contains("Something went wrong"));
        assert!(html.contains(r#"data-action="reload""#));
        assert!(html.contains("حدث خطأ ما"));
    }

    #[test]
    fn guarded_render_passes_through() {
        let (markup, fallback) = render_guarded("test", || html! { p { "ok" } }, || html! { p { "fallback" } });
        assert_eq!(markup.into_string(), "<p>ok</p>");
        assert!(!fallback);
    }

    #[test]
    fn guarded_render_catches_panic() {
        let (markup, fallback) = render_guarded(
            "test",
            || -> Markup { panic!("section exploded") },
            || html! { p { "fallback" } },
        );
        assert_eq!(markup.into_string(), "<p>fallback</p>");
        assert!(fallback);
    }

    #[test]
    fn html_escape_in_maud() {
        let mut config = SiteConfig::default();
        config.contact.location = "<script>alert('xss')</script>".into();
        let html = home_html(&config);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn generate_writes_pages_and_copies_assets() {
        let source = setup_source();
        let config = config::load_config(source.path()).unwrap();
        let out = tempfile::TempDir::new().unwrap();
        let report = generate(&config, &source.path().join("assets"), out.path()).unwrap();

        let files: Vec<&str> = report.pages.iter().map(|p| p.file.as_str()).collect();
        assert_eq!(files, vec!["index.html", "portfolio/index.html", "404.html"]);
        assert_eq!(report.fallback_count(), 0);
        assert!(report.assets.contains(&"images/hero-bg.png".to_string()));
        assert!(!report.missing_assets.contains(&"Amr_Ammory_CV.pdf".to_string()));

        let index = read_output(out.path(), "index.html");
        assert!(index.contains("mailto:test@example.com"));
        let hash = fingerprint(b"not really a png");
        assert!(index.contains(&format!("images/hero-bg.png?v={hash}")));

        let alias = read_output(out.path(), "portfolio/index.html");
        assert!(alias.contains(&format!("../images/hero-bg.png?v={hash}")));
        assert_eq!(read_output(out.path(), SCRIPT_FILE), JS);

        // Every URL on the not-found page points at a file in the output.
        let not_found = read_output(out.path(), "404.html");
        for file in [STYLESHEET_FILE, SCRIPT_FILE] {
            assert!(not_found.contains(&format!("\"/{file}?v=")), "{file}");
            assert!(out.path().join(file).is_file(), "{file}");
        }
        assert!(!not_found.contains("/portfolio/site.css"));
        assert!(read_output(out.path(), STYLESHEET_FILE).contains(":root.dark"));
    }
}

//! CLI output formatting for every command.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects. Diagnostics go through
//! `tracing` to stderr instead.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 home → index.html
//! 002 home → engineer-portfolio/index.html
//! 003 not-found → 404.html
//!
//! Static
//!     site.css?v=1a2b3c4d
//!     site.js?v=5e6f7a8b
//!
//! Assets
//! 001 Amr_Ammory_CV.pdf
//! 002 images/hero-bg.png
//!
//! Generated 3 pages, 2 assets
//! ```
//!
//! ## Check
//!
//! ```text
//! Translations
//!     190 keys in en, ar
//!
//! Gallery
//! 001 All (6 images)
//! 002 CAD Design (3 images)
//!
//! Routes
//!     / → index.html
//!     /engineer-portfolio → engineer-portfolio/index.html
//!     * → 404.html
//! ```

use crate::generate::{CheckReport, GenerateReport};
use crate::i18n::{Key, Language, translate};
use crate::routes::{self, Route};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Positional index + title, with an optional image count.
///
/// ```text
/// 001 All (6 images)
/// 002 home
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 image)", format_index(index), title),
        Some(n) => format!("{} {} ({} images)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn asset_lines(lines: &mut Vec<String>, heading: &str, paths: &[String], numbered: bool) {
    if paths.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    for (i, path) in paths.iter().enumerate() {
        if numbered {
            lines.push(format!("{} {}", format_index(i + 1), path));
        } else {
            lines.push(format!("{}{}", indent(1), path));
        }
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        let marker = if page.fallback { " (failure view)" } else { "" };
        lines.push(format!(
            "{} \u{2192} {}{}",
            entity_header(i + 1, page.route.name(), None),
            page.file,
            marker
        ));
    }

    lines.push(String::new());
    lines.push("Static".to_string());
    lines.push(format!("{}{}", indent(1), report.stylesheet));
    lines.push(format!("{}{}", indent(1), report.script));

    asset_lines(&mut lines, "Assets", &report.assets, true);
    asset_lines(&mut lines, "Missing assets", &report.missing_assets, false);

    lines.push(String::new());
    let mut summary = format!(
        "Generated {}, {}",
        plural(report.pages.len(), "page"),
        plural(report.assets.len(), "asset")
    );
    let fallbacks = report.fallback_count();
    if fallbacks > 0 {
        summary.push_str(&format!(" ({} failed to render)", fallbacks));
    }
    lines.push(summary);
    lines
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(report: &CheckReport, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Translations".to_string()];
    let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    lines.push(format!(
        "{}{} in {}",
        indent(1),
        plural(report.key_count, "key"),
        codes.join(", ")
    ));

    lines.push(String::new());
    lines.push("Gallery".to_string());
    for (i, (filter, count)) in report.gallery.iter().enumerate() {
        let label = translate(Language::En, filter.label());
        lines.push(entity_header(i + 1, label, Some(*count)));
    }

    lines.push(String::new());
    lines.push("Routes".to_string());
    for file in &report.home_files {
        let path = match file.strip_suffix("index.html") {
            Some("") => "/".to_string(),
            Some(dir) => format!("/{}", dir.trim_end_matches('/')),
            None => format!("/{file}"),
        };
        lines.push(format!("{}{} \u{2192} {}", indent(1), path, file));
    }
    lines.push(format!(
        "{}* \u{2192} {}",
        indent(1),
        Route::NotFound.output_file()
    ));

    asset_lines(&mut lines, "Assets", &report.assets_found, true);
    asset_lines(&mut lines, "Missing assets", &report.missing_assets, false);

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    if source_root.join("assets").is_dir() {
        lines.push(format!("{}assets/", indent(1)));
    }
    lines
}

pub fn print_check_output(report: &CheckReport, source_root: &Path) {
    for line in format_check_output(report, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// keys
// ============================================================================

/// List translation keys. With a language, one `key  value` line per key;
/// without, each key followed by its value in every language.
pub fn format_keys(language: Option<Language>) -> Vec<String> {
    let width = Key::ALL.iter().map(|k| k.as_str().len()).max().unwrap_or(0);
    let mut lines = Vec::new();
    for key in Key::ALL {
        match language {
            Some(language) => lines.push(format!(
                "{:width$}  {}",
                key.as_str(),
                truncate_desc(translate(language, *key), 60),
            )),
            None => {
                lines.push(key.as_str().to_string());
                for language in Language::ALL {
                    lines.push(format!(
                        "{}{}: {}",
                        indent(1),
                        language,
                        truncate_desc(translate(language, *key), 60)
                    ));
                }
            }
        }
    }
    lines
}

pub fn print_keys(language: Option<Language>) {
    for line in format_keys(language) {
        println!("{}", line);
    }
}

// ============================================================================
// route
// ============================================================================

pub fn format_route(path: &str, base_path: &str) -> Vec<String> {
    let route = routes::resolve(path, base_path);
    vec![format!(
        "{} \u{2192} {} ({})",
        path,
        route.name(),
        route.output_file()
    )]
}

pub fn print_route(path: &str, base_path: &str) {
    for line in format_route(path, base_path) {
        println!("{}", line);
    }
}

// ============================================================================
// theme
// ============================================================================

pub fn format_theme(is_dark_mode: bool, root_class: Option<&str>, state_file: &Path) -> Vec<String> {
    vec![
        format!("Dark mode: {}", if is_dark_mode { "on" } else { "off" }),
        format!("{}Root class: {}", indent(1), root_class.unwrap_or("(none)")),
        format!("{}Stored in: {}", indent(1), state_file.display()),
    ]
}

pub fn print_theme(is_dark_mode: bool, root_class: Option<&str>, state_file: &Path) {
    for line in format_theme(is_dark_mode, root_class, state_file) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Category, Filter};
    use crate::generate::GeneratedPage;

    // =========================================================================
    // Helper tests
    // =========================================================================

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
    fn entity_header_counts() {
        assert_eq!(entity_header(1, "All", Some(6)), "001 All (6 images)");
        assert_eq!(entity_header(4, "Docs", Some(1)), "004 Docs (1 image)");
        assert_eq!(entity_header(2, "home", None), "002 home");
    }

    #[test]
    fn truncate_desc_counts_characters() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
        // Multi-byte text must not be split inside a character.
        assert_eq!(truncate_desc("الرئيسية", 3), "الر...");
    }

    // =========================================================================
    // build
    // =========================================================================

    fn report() -> GenerateReport {
        GenerateReport {
            pages: vec![
                GeneratedPage {
                    route: Route::Home,
                    file: "index.html".into(),
                    fallback: false,
                },
                GeneratedPage {
                    route: Route::NotFound,
                    file: "404.html".into(),
                    fallback: false,
                },
            ],
            stylesheet: "site.css?v=00000000".into(),
            script: "site.js?v=11111111".into(),
            assets: vec!["images/a.jpg".into()],
            missing_assets: vec![],
        }
    }

    #[test]
    fn build_output_lists_pages_and_summary() {
        let lines = format_build_output(&report());
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 home \u{2192} index.html");
        assert_eq!(lines[2], "002 not-found \u{2192} 404.html");
        assert!(lines.contains(&"    site.css?v=00000000".to_string()));
        assert!(lines.contains(&"001 images/a.jpg".to_string()));
        assert!(!lines.contains(&"Missing assets".to_string()));
        assert_eq!(lines.last().unwrap(), "Generated 2 pages, 1 asset");
    }

    #[test]
    fn build_output_marks_fallbacks_and_missing_assets() {
        let mut report = report();
        report.pages[0].fallback = true;
        report.missing_assets = vec!["images/b.jpg".into()];
        let lines = format_build_output(&report);
        assert_eq!(lines[1], "001 home \u{2192} index.html (failure view)");
        assert!(lines.contains(&"    images/b.jpg".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 2 pages, 1 asset (1 failed to render)"
        );
    }

    // =========================================================================
    // check
    // =========================================================================

    #[test]
    fn check_output_sections() {
        let report = CheckReport {
            key_count: 190,
            gallery: vec![(Filter::All, 6), (Filter::Only(Category::CadDesign), 3)],
            home_files: vec!["index.html".into(), "engineer-portfolio/index.html".into()],
            assets_found: vec![],
            missing_assets: vec!["images/a.jpg".into()],
        };
        let tmp = tempfile::TempDir::new().unwrap();
        let lines = format_check_output(&report, tmp.path());
        assert_eq!(lines[1], "    190 keys in en, ar");
        assert!(lines.contains(&"001 All (6 images)".to_string()));
        assert!(lines.contains(&"002 CAD Design (3 images)".to_string()));
        assert!(lines.contains(&"    / \u{2192} index.html".to_string()));
        assert!(lines.contains(&"    /engineer-portfolio \u{2192} engineer-portfolio/index.html".to_string()));
        assert!(lines.contains(&"    * \u{2192} 404.html".to_string()));
        assert!(lines.contains(&"    images/a.jpg".to_string()));
        assert_eq!(lines.last().unwrap(), "    (stock defaults)");
    }

    // =========================================================================
    // keys / route / theme
    // =========================================================================

    #[test]
    fn keys_for_one_language() {
        let lines = format_keys(Some(Language::Ar));
        assert_eq!(lines.len(), Key::ALL.len());
        let home = lines.iter().find(|l| l.starts_with("nav.home ")).unwrap();
        assert!(home.ends_with("الرئيسية"));
    }

    #[test]
    fn keys_for_all_languages() {
        let lines = format_keys(None);
        assert_eq!(lines.len(), Key::ALL.len() * 3);
        let at = lines.iter().position(|l| l == "nav.home").unwrap();
        assert_eq!(lines[at + 1], "    en: Home");
        assert_eq!(lines[at + 2], "    ar: الرئيسية");
    }

    #[test]
    fn route_lines() {
        assert_eq!(
            format_route("/engineer-portfolio/", "/engineer-portfolio"),
            vec!["/engineer-portfolio/ \u{2192} home (index.html)"]
        );
        assert_eq!(
            format_route("/404", "/engineer-portfolio"),
            vec!["/404 \u{2192} not-found (404.html)"]
        );
    }

    #[test]
    fn theme_lines() {
        let lines = format_theme(true, Some("dark"), Path::new("state.json"));
        assert_eq!(lines[0], "Dark mode: on");
        assert_eq!(lines[1], "    Root class: dark");
        assert_eq!(lines[2], "    Stored in: state.json");
        assert_eq!(format_theme(false, None, Path::new("s"))[1], "    Root class: (none)");
    }
}

//! Shared test utilities.
//!
//! Builders for gallery records, a throwaway source directory with a config
//! file and assets, and lookups over generated output that panic with a clear
//! message on miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = setup_source();
//! let out = tempfile::TempDir::new().unwrap();
//! generate(&config, &source.path().join("assets"), out.path()).unwrap();
//!
//! let html = read_output(out.path(), "index.html");
//! assert!(html.contains("lang=\"ar\""));
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::gallery::{Category, GalleryImage};
use crate::i18n::Text;

// =========================================================================
// Gallery records
// =========================================================================

/// A minimal gallery image. Id doubles as the title.
pub fn gallery_image(id: &'static str, category: Category) -> GalleryImage {
    GalleryImage {
        id,
        title: Text::same(id),
        description: Text::new("description", "وصف"),
        category,
        image: "/images/test.jpg",
        thumbnail: "/images/test.jpg",
        tags: &[],
        project_link: None,
        drive_link: None,
    }
}

/// Ids of images in order.
pub fn ids<'a>(images: &[&'a GalleryImage]) -> Vec<&'a str> {
    images.iter().map(|i| i.id).collect()
}

// =========================================================================
// Source directory fixture
// =========================================================================

/// A source directory with a small `config.toml` and an `assets/` tree.
pub fn setup_source() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
base_path = "/portfolio"

[contact]
email = "test@example.com"
"#,
    )
    .unwrap();

    let assets = tmp.path().join("assets");
    fs::create_dir_all(assets.join("images")).unwrap();
    fs::write(assets.join("images/hero-bg.png"), b"not really a png").unwrap();
    fs::write(assets.join("Amr_Ammory_CV.pdf"), b"%PDF-1.4 en").unwrap();
    fs::write(assets.join("Amr_Ammory_CV_Arabic.pdf"), b"%PDF-1.4 ar").unwrap();
    tmp
}

// =========================================================================
// Output lookups
// =========================================================================

/// Read a generated file. Panics listing the output tree if it is missing.
pub fn read_output(output: &Path, relative: &str) -> String {
    let path = output.join(relative);
    fs::read_to_string(&path).unwrap_or_else(|_| {
        let files: Vec<String> = walkdir::WalkDir::new(output)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(output).unwrap().display().to_string())
            .collect();
        panic!("output file '{relative}' not found. Available: {files:?}")
    })
}

/// The markup of the `<div class="locale" lang="...">` block for one language.
///
/// Panics if the page has no block for `lang`.
pub fn locale_block<'a>(html: &'a str, lang: &str) -> &'a str {
    let marker = format!("class=\"locale\" lang=\"{lang}\"");
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("no locale block for '{lang}'"));
    let rest = &html[start..];
    let end = rest[marker.len()..]
        .find("class=\"locale\" lang=")
        .map(|i| i + marker.len())
        .unwrap_or(rest.len());
    &rest[..end]
}

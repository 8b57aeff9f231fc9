//! Gallery filtering and lightbox navigation.
//!
//! The gallery shows a grid of project images that can be narrowed to one
//! [`Category`]. Clicking a thumbnail opens a lightbox on that image; inside the
//! lightbox, next/previous walk the *filtered* list and wrap at both ends.
//!
//! ```text
//!             open(i)                next: (i + 1) mod N
//!   Closed ───────────► Open(i) ◄──┐ prev: (i + N - 1) mod N
//!     ▲                   │  └─────┘
//!     └──── close ────────┘
//! ```
//!
//! ## Filter changes while open
//!
//! Changing the filter re-derives the filtered list under an open lightbox.
//! The selected image is looked up by id in the new list and the index follows
//! it; when the image is not part of the new list the lightbox closes. The
//! index is therefore always valid while the lightbox is open.

use crate::i18n::{Key, Text};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GalleryError {
    #[error("Duplicate gallery image id: {0}")]
    DuplicateId(String),
    #[error("Gallery image {0} has an empty image path")]
    MissingImage(String),
}

/// Gallery category. The set is fixed; declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CadDesign,
    FeaAnalysis,
    TechnicalDocumentation,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::CadDesign,
        Category::FeaAnalysis,
        Category::TechnicalDocumentation,
    ];

    /// Stable identifier used in markup and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Category::CadDesign => "cad-design",
            Category::FeaAnalysis => "fea-analysis",
            Category::TechnicalDocumentation => "technical-documentation",
        }
    }

    pub fn label(self) -> Key {
        match self {
            Category::CadDesign => Key::GalleryCadDesign,
            Category::FeaAnalysis => Key::GalleryFeaAnalysis,
            Category::TechnicalDocumentation => Key::GalleryTechnicalDocumentation,
        }
    }
}

/// Category filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// `All` followed by each category, in display order.
    pub fn choices() -> Vec<Filter> {
        std::iter::once(Filter::All)
            .chain(Category::ALL.into_iter().map(Filter::Only))
            .collect()
    }

    pub fn slug(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.slug(),
        }
    }

    pub fn label(self) -> Key {
        match self {
            Filter::All => Key::GalleryAll,
            Filter::Only(category) => category.label(),
        }
    }

    pub fn parse(slug: &str) -> Option<Filter> {
        Filter::choices().into_iter().find(|f| f.slug() == slug)
    }

    pub fn matches(self, image: &GalleryImage) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => image.category == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: &'static str,
    pub title: Text,
    pub description: Text,
    pub category: Category,
    pub image: &'static str,
    pub thumbnail: &'static str,
    pub tags: &'static [&'static str],
    pub project_link: Option<&'static str>,
    pub drive_link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize },
}

#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    filter: Filter,
    lightbox: Lightbox,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            filter: Filter::All,
            lightbox: Lightbox::Closed,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// Images matching the active filter, in original order.
    pub fn filtered(&self) -> Vec<&GalleryImage> {
        self.images.iter().filter(|i| self.filter.matches(i)).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.images.iter().filter(|i| self.filter.matches(i)).count()
    }

    /// Filter choices offered above the grid: `All`, then each category.
    pub fn categories(&self) -> Vec<Filter> {
        Filter::choices()
    }

    /// Number of images in each category, `All` first.
    pub fn counts(&self) -> Vec<(Filter, usize)> {
        Filter::choices()
            .into_iter()
            .map(|f| (f, self.images.iter().filter(|i| f.matches(i)).count()))
            .collect()
    }

    /// Change the filter, keeping an open lightbox on the same image when the
    /// image is still visible and closing it otherwise.
    pub fn set_filter(&mut self, filter: Filter) {
        let selected_id = self.selected_image().map(|i| i.id);
        self.filter = filter;

        if let Some(id) = selected_id {
            self.lightbox = match self.position_of(id) {
                Some(index) => Lightbox::Open { index },
                None => {
                    tracing::debug!(image = id, filter = %filter, "selected image filtered out, closing lightbox");
                    Lightbox::Closed
                }
            };
        }
    }

    /// Open the lightbox at `index` of the filtered list.
    ///
    /// Returns `false` and leaves the state unchanged when `index` is out of range.
    pub fn open(&mut self, index: usize) -> bool {
        if index < self.filtered_len() {
            self.lightbox = Lightbox::Open { index };
            true
        } else {
            false
        }
    }

    /// Open the lightbox on the image with `id`, if the filter shows it.
    pub fn open_image(&mut self, id: &str) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.lightbox = Lightbox::Open { index };
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        if let Lightbox::Open { index } = self.lightbox {
            let len = self.filtered_len();
            if len > 0 {
                self.lightbox = Lightbox::Open {
                    index: (index + 1) % len,
                };
            }
        }
    }

    pub fn prev(&mut self) {
        if let Lightbox::Open { index } = self.lightbox {
            let len = self.filtered_len();
            if len > 0 {
                self.lightbox = Lightbox::Open {
                    index: (index + len - 1) % len,
                };
            }
        }
    }

    pub fn close(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Open { index } => Some(index),
            Lightbox::Closed => None,
        }
    }

    pub fn selected_image(&self) -> Option<&GalleryImage> {
        let index = self.current_index()?;
        self.images
            .iter()
            .filter(|i| self.filter.matches(i))
            .nth(index)
    }

    /// Lightbox position as shown to the visitor, e.g. `"2 / 3"`.
    pub fn counter(&self) -> Option<String> {
        self.current_index()
            .map(|index| format!("{} / {}", index + 1, self.filtered_len()))
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.images
            .iter()
            .filter(|i| self.filter.matches(i))
            .position(|i| i.id == id)
    }
}

/// Check gallery data for duplicate ids and missing image paths.
pub fn validate_images(images: &[GalleryImage]) -> Result<(), GalleryError> {
    let mut seen = HashSet::new();
    for image in images {
        if !seen.insert(image.id) {
            return Err(GalleryError::DuplicateId(image.id.to_string()));
        }
        if image.image.trim().is_empty() {
            return Err(GalleryError::MissingImage(image.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{gallery_image, ids};

    fn sample() -> Gallery {
        Gallery::new(vec![
            gallery_image("1", Category::CadDesign),
            gallery_image("2", Category::FeaAnalysis),
            gallery_image("3", Category::CadDesign),
            gallery_image("4", Category::FeaAnalysis),
            gallery_image("5", Category::CadDesign),
        ])
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    #[test]
    fn filter_all_returns_everything_in_order() {
        let gallery = sample();
        assert_eq!(ids(&gallery.filtered()), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn filter_category_keeps_relative_order() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::CadDesign));
        assert_eq!(ids(&gallery.filtered()), vec!["1", "3", "5"]);
        gallery.set_filter(Filter::Only(Category::FeaAnalysis));
        assert_eq!(ids(&gallery.filtered()), vec!["2", "4"]);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::TechnicalDocumentation));
        assert!(gallery.filtered().is_empty());
        assert!(!gallery.open(0));
        assert_eq!(gallery.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn counts_per_filter() {
        let gallery = sample();
        assert_eq!(
            gallery.counts(),
            vec![
                (Filter::All, 5),
                (Filter::Only(Category::CadDesign), 3),
                (Filter::Only(Category::FeaAnalysis), 2),
                (Filter::Only(Category::TechnicalDocumentation), 0),
            ]
        );
    }

    #[test]
    fn filter_choices_start_with_all() {
        let choices = Filter::choices();
        assert_eq!(choices[0], Filter::All);
        assert_eq!(choices.len(), Category::ALL.len() + 1);
    }

    #[test]
    fn filter_parse_slugs() {
        assert_eq!(Filter::parse("all"), Some(Filter::All));
        assert_eq!(
            Filter::parse("fea-analysis"),
            Some(Filter::Only(Category::FeaAnalysis))
        );
        assert_eq!(Filter::parse("FEA Analysis"), None);
    }

    // =========================================================================
    // Lightbox navigation
    // =========================================================================

    #[test]
    fn open_selects_image_at_filtered_index() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::FeaAnalysis));
        assert!(gallery.open(1));
        assert_eq!(gallery.selected_image().map(|i| i.id), Some("4"));
    }

    #[test]
    fn open_out_of_range_is_rejected() {
        let mut gallery = sample();
        assert!(!gallery.open(5));
        assert_eq!(gallery.selected_image(), None);
    }

    #[test]
    fn next_wraps_to_start() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::CadDesign));
        gallery.open(2);
        gallery.next();
        assert_eq!(gallery.current_index(), Some(0));
        assert_eq!(gallery.selected_image().map(|i| i.id), Some("1"));
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::CadDesign));
        gallery.open(0);
        gallery.prev();
        assert_eq!(gallery.current_index(), Some(2));
        assert_eq!(gallery.selected_image().map(|i| i.id), Some("5"));
    }

    #[test]
    fn next_then_prev_returns_to_same_image() {
        let mut gallery = sample();
        gallery.open(3);
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.current_index(), Some(3));
    }

    #[test]
    fn single_image_wraps_onto_itself() {
        let mut gallery = Gallery::new(vec![gallery_image("only", Category::CadDesign)]);
        gallery.open(0);
        gallery.next();
        assert_eq!(gallery.current_index(), Some(0));
        gallery.prev();
        assert_eq!(gallery.current_index(), Some(0));
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut gallery = sample();
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn close_returns_to_closed() {
        let mut gallery = sample();
        gallery.open(1);
        gallery.close();
        assert_eq!(gallery.lightbox(), Lightbox::Closed);
        assert_eq!(gallery.counter(), None);
    }

    #[test]
    fn open_image_by_id() {
        let mut gallery = sample();
        assert!(gallery.open_image("3"));
        assert_eq!(gallery.current_index(), Some(2));
        assert!(!gallery.open_image("missing"));
    }

    #[test]
    fn open_image_hidden_by_filter_fails() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::FeaAnalysis));
        assert!(!gallery.open_image("1"));
    }

    #[test]
    fn counter_is_one_based() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::CadDesign));
        gallery.open(1);
        assert_eq!(gallery.counter().as_deref(), Some("2 / 3"));
    }

    // =========================================================================
    // Filter change while open
    // =========================================================================

    #[test]
    fn filter_change_follows_selected_image() {
        let mut gallery = sample();
        gallery.open(4); // image 5, a CAD design
        gallery.set_filter(Filter::Only(Category::CadDesign));
        assert_eq!(gallery.current_index(), Some(2));
        assert_eq!(gallery.selected_image().map(|i| i.id), Some("5"));
    }

    #[test]
    fn filter_change_closes_when_image_filtered_out() {
        let mut gallery = sample();
        gallery.open(1); // image 2, FEA
        gallery.set_filter(Filter::Only(Category::CadDesign));
        assert_eq!(gallery.lightbox(), Lightbox::Closed);
    }

    #[test]
    fn filter_change_back_to_all_relocates() {
        let mut gallery = sample();
        gallery.set_filter(Filter::Only(Category::FeaAnalysis));
        gallery.open(1); // image 4
        gallery.set_filter(Filter::All);
        assert_eq!(gallery.current_index(), Some(3));
        assert_eq!(gallery.selected_image().map(|i| i.id), Some("4"));
    }

    #[test]
    fn index_always_valid_while_open() {
        let mut gallery = sample();
        for filter in Filter::choices() {
            gallery.set_filter(Filter::All);
            gallery.open(4);
            gallery.set_filter(filter);
            if let Some(index) = gallery.current_index() {
                assert!(index < gallery.filtered_len());
                assert!(gallery.selected_image().is_some());
            }
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_rejects_duplicate_ids() {
        let images = vec![
            gallery_image("1", Category::CadDesign),
            gallery_image("1", Category::FeaAnalysis),
        ];
        assert_eq!(
            validate_images(&images),
            Err(GalleryError::DuplicateId("1".into()))
        );
    }

    #[test]
    fn validate_accepts_unique_ids() {
        assert!(validate_images(sample().images()).is_ok());
    }
}

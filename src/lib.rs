//! # Engineer Portfolio
//!
//! A bilingual (English/Arabic) single-page portfolio site for a mechanical
//! engineer, generated as static files. The site text, skills, gallery and
//! experience data are compiled in; a sparse `config.toml` overrides contact
//! details, deployment prefix and colors.
//!
//! # Architecture
//!
//! Three small state containers carry the only logic the site has. Each is
//! an owned value injected where it is needed, never a global:
//!
//! ```text
//! LanguageState   active language + key lookup + change listeners
//! ThemeState      dark-mode flag ⇄ Storage ("darkMode") ⇄ DocumentRoot class
//! Gallery         image list, category filter, lightbox index
//! ```
//!
//! [`generate`] renders both languages into one document with Maud, plus a
//! small vanilla script (`static/site.js`) that drives the same state
//! transitions in the browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`i18n`] | `Language`, the closed translation `Key` set and its dictionary |
//! | [`language`] | Active-language state with lookup, toggle and subscriptions |
//! | [`storage`] | Fallible key-value store: in-memory and JSON-file backends |
//! | [`theme`] | Dark-mode state mirrored onto the document root class |
//! | [`gallery`] | Category filtering and lightbox navigation |
//! | [`contact`] | Contact form validation and the "thank you" reset timer |
//! | [`routes`] | Home / not-found route table and output file names |
//! | [`content`] | Built-in section data (skills, services, projects, experience) |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`generate`] | HTML rendering, asset copying and fingerprinting |
//! | [`logging`] | `tracing-subscriber` setup for the binary |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Document, Two Languages
//!
//! Both locales are rendered into the same page, each in a
//! `<div class="locale" lang dir>`; the non-default block is `hidden`.
//! Toggling the language swaps which block is visible, so the site works as
//! plain files with no server and no client-side templating. Element ids carry
//! the language code (`en-about`, `ar-about`) to stay unique.
//!
//! ## Closed Translation Keys
//!
//! Every key is a variant of [`i18n::Key`] and every variant has both values,
//! so a missing translation is a compile error. String lookups (CLI, tests)
//! go through [`i18n::Key::parse`] and return `Option`.
//!
//! ## Theme Before First Paint
//!
//! A tiny inline script in `<head>` reads the stored preference and sets the
//! `dark` class before the stylesheet applies, so the page never flashes the
//! wrong palette.

pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod generate;
pub mod i18n;
pub mod language;
pub mod logging;
pub mod output;
pub mod routes;
pub mod storage;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;

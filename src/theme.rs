//! Dark-mode preference.
//!
//! [`ThemeState`] owns the boolean preference, the [`Storage`] it is persisted
//! to, and the [`DocumentRoot`] whose class list mirrors it. The root carries
//! [`DARK_CLASS`] exactly when dark mode is on; every transition goes through
//! [`ThemeState::set`], which writes storage and updates the root together, so
//! the two can never drift apart.
//!
//! Storage is best-effort. A missing, unreadable or unparseable value starts the
//! page in light mode; failed writes are logged and otherwise ignored. Neither
//! case is surfaced to the caller.

use crate::storage::Storage;
use std::collections::BTreeSet;

/// Storage key of the persisted preference.
pub const STORAGE_KEY: &str = "darkMode";

/// Class toggled on the document root.
pub const DARK_CLASS: &str = "dark";

/// Class list of the document's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Space-separated class attribute value, or `None` when empty.
    pub fn class_attr(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.iter().cloned().collect::<Vec<_>>().join(" "))
        }
    }
}

#[derive(Debug)]
pub struct ThemeState<S: Storage> {
    is_dark_mode: bool,
    storage: S,
    root: DocumentRoot,
}

impl<S: Storage> ThemeState<S> {
    /// Read the saved preference and apply it to `root`.
    ///
    /// The resolved value is written straight back, so storage always holds a
    /// well-formed value after initialization.
    pub fn init(storage: S, root: DocumentRoot) -> Self {
        let is_dark_mode = read_preference(&storage);
        let mut state = Self {
            is_dark_mode,
            storage,
            root,
        };
        state.apply();
        state
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_dark_mode);
    }

    pub fn set(&mut self, is_dark_mode: bool) {
        self.is_dark_mode = is_dark_mode;
        self.apply();
    }

    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, e.g. to hand it to a fresh instance.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn apply(&mut self) {
        let value = serialize_preference(self.is_dark_mode);
        if let Err(e) = self.storage.set_item(STORAGE_KEY, &value) {
            tracing::warn!(error = %e, "failed to persist dark mode preference");
        }
        if self.is_dark_mode {
            self.root.add_class(DARK_CLASS);
        } else {
            self.root.remove_class(DARK_CLASS);
        }
    }
}

fn read_preference(storage: &impl Storage) -> bool {
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => parse_preference(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "ignoring unparseable dark mode preference");
            false
        }),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read dark mode preference");
            false
        }
    }
}

/// Parse a stored value. Values are JSON booleans (`"true"` / `"false"`).
pub fn parse_preference(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw.trim()).ok()
}

pub fn serialize_preference(is_dark_mode: bool) -> String {
    serde_json::Value::Bool(is_dark_mode).to_string()
}

//! Language state.
//!
//! [`LanguageState`] holds the active [`Language`] and answers translation
//! lookups against it. It is an ordinary value: create one per page render (or
//! per test) and pass it down to whatever needs text. Nothing is global and
//! nothing is persisted; a fresh state always starts from the configured
//! default, the way a reloaded page does.
//!
//! Consumers that need to react to a language change register a callback with
//! [`LanguageState::subscribe`]. Callbacks run synchronously, in registration
//! order, after the language has changed.

use crate::i18n::{self, Key, Language};

/// Handle returned by [`LanguageState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Language)>;

pub struct LanguageState {
    language: Language,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Flip between English and Arabic and notify subscribers.
    pub fn toggle(&mut self) {
        self.language = self.language.toggled();
        tracing::debug!(language = %self.language, "language toggled");
        self.notify();
    }

    /// Switch to `language`. Subscribers are only notified on an actual change.
    pub fn set(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.notify();
        }
    }

    /// Localized text for `key` in the active language.
    pub fn lookup(&self, key: Key) -> &'static str {
        i18n::translate(self.language, key)
    }

    /// String-keyed lookup. Unknown keys resolve to `None`.
    pub fn lookup_str(&self, key: &str) -> Option<&'static str> {
        Key::parse(key).map(|k| self.lookup(k))
    }

    /// String-keyed lookup with a caller-supplied fallback for unknown keys.
    pub fn lookup_or<'a>(&self, key: &str, fallback: &'a str) -> &'a str {
        self.lookup_str(key).unwrap_or(fallback)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let language = self.language;
        for (_, listener) in &mut self.listeners {
            listener(language);
        }
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl std::fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageState")
            .field("language", &self.language)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_in_english_by_default() {
        let state = LanguageState::default();
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn toggle_flips_and_twice_restores() {
        for start in Language::ALL {
            let mut state = LanguageState::new(start);
            state.toggle();
            assert_eq!(state.language(), start.toggled());
            state.toggle();
            assert_eq!(state.language(), start);
        }
    }

    #[test]
    fn lookup_follows_toggle() {
        let mut state = LanguageState::new(Language::En);
        assert_eq!(state.lookup(Key::NavHome), "Home");
        state.toggle();
        assert_eq!(state.lookup(Key::NavHome), "الرئيسية");
    }

    #[test]
    fn lookup_str_known_and_unknown() {
        let state = LanguageState::new(Language::Ar);
        assert_eq!(state.lookup_str("nav.home"), Some("الرئيسية"));
        assert_eq!(state.lookup_str("nav.missing"), None);
    }

    #[test]
    fn lookup_or_uses_caller_fallback() {
        let state = LanguageState::default();
        assert_eq!(state.lookup_or("about.title", "fallback"), "About Me");
        assert_eq!(state.lookup_or("about.nope", "fallback"), "fallback");
    }

    #[test]
    fn fresh_state_does_not_remember_previous_choice() {
        let mut state = LanguageState::default();
        state.toggle();
        assert_eq!(state.language(), Language::Ar);
        let reloaded = LanguageState::default();
        assert_eq!(reloaded.language(), Language::En);
    }

    #[test]
    fn subscribers_see_every_toggle() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = LanguageState::default();
        let sink = Rc::clone(&seen);
        state.subscribe(move |lang| sink.borrow_mut().push(lang));

        state.toggle();
        state.toggle();

        assert_eq!(*seen.borrow(), vec![Language::Ar, Language::En]);
    }

    #[test]
    fn set_to_same_language_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut state = LanguageState::default();
        let sink = Rc::clone(&count);
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set(Language::En);
        assert_eq!(*count.borrow(), 0);
        state.set(Language::Ar);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut state = LanguageState::default();
        let sink = Rc::clone(&count);
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.toggle();
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.toggle();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = LanguageState::default();
        let b = LanguageState::default();
        a.toggle();
        assert_eq!(a.language(), Language::Ar);
        assert_eq!(b.language(), Language::En);
    }
}

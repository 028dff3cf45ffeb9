use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::{LOCALE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::locale::Locale;
use crate::theme::{default_theme, Theme, ThemeHints};

/// String key/value storage that survives reloads. Writes are best effort.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

pub fn saved_theme(store: &dyn PreferenceStore) -> Option<Theme> {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) {
    store.set(THEME_STORAGE_KEY, theme.as_str());
}

/// Saved theme, or the environment default which is then persisted so the
/// next load does not depend on the clock.
pub fn load_theme(store: &dyn PreferenceStore, hints: ThemeHints) -> Theme {
    if let Some(theme) = saved_theme(store) {
        return theme;
    }
    let theme = default_theme(hints);
    save_theme(store, theme);
    theme
}

pub fn load_locale(store: &dyn PreferenceStore, fallback: Locale) -> Locale {
    store
        .get(LOCALE_STORAGE_KEY)
        .and_then(|raw| Locale::parse(&raw))
        .unwrap_or(fallback)
}

pub fn save_locale(store: &dyn PreferenceStore, locale: Locale) {
    store.set(LOCALE_STORAGE_KEY, locale.code());
}

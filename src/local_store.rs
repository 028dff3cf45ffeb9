use gallery_core::PreferenceStore;
use web_sys::Storage;

/// `window.localStorage`. Missing or blocked storage (private mode, sandboxed
/// iframes) reads as empty and swallows writes.
pub(crate) struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("gallery: local storage unavailable, preferences not persisted");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{save_theme, Theme};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn values_survive_a_new_handle() {
        let store = LocalStore::open();
        store.set("gallery.test.key", "dark");
        let reopened = LocalStore::open();
        assert_eq!(reopened.get("gallery.test.key").as_deref(), Some("dark"));
        assert_eq!(reopened.get("gallery.test.missing"), None);
    }

    #[wasm_bindgen_test]
    fn theme_is_stored_as_plain_value_under_theme_key() {
        let store = LocalStore::open();
        save_theme(&store, Theme::Dark);
        let raw = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .get_item("theme")
            .unwrap();
        assert_eq!(raw.as_deref(), Some("dark"));
        save_theme(&store, Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}

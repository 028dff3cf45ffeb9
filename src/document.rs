use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use gallery_core::{Locale, SiteTexts, Theme, ThemeHints};

const META_THEME_ID: &str = "meta-theme-color";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Elements a Tab press can land on inside the lightbox.
pub(crate) const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub(crate) fn theme_hints() -> ThemeHints {
    ThemeHints {
        system_prefers_dark: system_prefers_dark(),
        local_hour: Date::new_0().get_hours(),
    }
}

fn system_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_SCHEME_QUERY).ok()??;
    Some(query.matches())
}

/// Mirrors the theme onto `<html data-theme>` and the browser-chrome meta tag.
pub(crate) fn apply_theme(theme: Theme) {
    let Some(document) = document() else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(meta) = document.get_element_by_id(META_THEME_ID) {
        let _ = meta.set_attribute("content", theme.meta_color());
    }
}

pub(crate) fn apply_site_texts(locale: Locale, texts: &SiteTexts) {
    let Some(document) = document() else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", locale.code());
    }
    document.set_title(&texts.document_title);
}

pub(crate) fn current_year() -> i32 {
    Date::new_0().get_full_year() as i32
}

pub(crate) fn now_ms() -> f64 {
    Date::now()
}

pub(crate) fn set_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

pub(crate) fn active_element() -> Option<HtmlElement> {
    document()?.active_element()?.dyn_into::<HtmlElement>().ok()
}

pub(crate) fn focusable_within(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn theme_lands_on_root_and_meta() {
        let document = document().unwrap();
        let meta = document.create_element("meta").unwrap();
        meta.set_id(META_THEME_ID);
        document.head().unwrap().append_child(&meta).unwrap();

        apply_theme(Theme::Dark);
        let root = document.document_element().unwrap();
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
        assert_eq!(meta.get_attribute("content").as_deref(), Some("#1b1d21"));

        apply_theme(Theme::Light);
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
        assert_eq!(meta.get_attribute("content").as_deref(), Some("#ffffff"));
        meta.remove();
    }

    #[wasm_bindgen_test]
    fn scroll_lock_toggles_body_overflow() {
        let body = document().unwrap().body().unwrap();
        set_scroll_locked(true);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
        set_scroll_locked(false);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
    }

    #[wasm_bindgen_test]
    fn focusable_skips_disabled_and_negative_tabindex() {
        let document = document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(
            r#"<button>a</button><button disabled>b</button><span tabindex="-1">c</span><a href="x">d</a>"#,
        );
        let found = focusable_within(&container);
        assert_eq!(found.len(), 2);
    }
}

use wasm_bindgen::JsValue;
use web_sys::{Url, UrlSearchParams};

use gallery_core::{page_param, parse_page_param, GalleryConfig};

const PAGE_PARAM: &str = "page";

pub(crate) fn load_config() -> GalleryConfig {
    GalleryConfig::with_asset_base(asset_base())
}

fn asset_base() -> Option<&'static str> {
    option_env!("GALLERY_ASSET_BASE")
        .or(option_env!("TRUNK_PUBLIC_GALLERY_ASSET_BASE"))
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
}

pub(crate) fn page_from_location() -> usize {
    let Some(window) = web_sys::window() else {
        return 1;
    };
    let search = window.location().search().unwrap_or_default();
    parse_page_from_query(&search)
}

fn parse_page_from_query(search: &str) -> usize {
    let search = search.trim();
    if search.is_empty() {
        return 1;
    }
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return 1;
    };
    parse_page_param(params.get(PAGE_PARAM).as_deref())
}

/// Rewrites `?page=` in place; page 1 drops the parameter. Never pushes history.
pub(crate) fn replace_page_param(page: usize) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = Url::new(&href) else {
        return;
    };
    let params = url.search_params();
    match page_param(page) {
        Some(value) => params.set(PAGE_PARAM, &value),
        None => params.delete(PAGE_PARAM),
    }
    let next = url.href();
    if next == href {
        return;
    }
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&next));
    }
}

use gloo_net::http::Request;
use web_sys::RequestCache;

use gallery_core::{
    check_status, parse_manifest, GalleryConfig, GalleryError, Photo, PhotoTitles, StringTable,
};

async fn fetch_text(url: &str) -> Result<String, GalleryError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|err| GalleryError::Network {
            url: url.to_string(),
            message: err.to_string(),
        })?;
    check_status(url, response.ok(), response.status())?;
    response.text().await.map_err(|err| GalleryError::Network {
        url: url.to_string(),
        message: err.to_string(),
    })
}

pub(crate) async fn load_photos(config: &GalleryConfig) -> Result<Vec<Photo>, GalleryError> {
    let url = config.manifest_url();
    let raw = fetch_text(&url).await?;
    parse_manifest(&url, &raw, &config.layout)
}

/// Both translation files, each degrading to empty on failure.
pub(crate) async fn load_translations(config: &GalleryConfig) -> (StringTable, PhotoTitles) {
    let strings_url = config.strings_url();
    let strings = fetch_text(&strings_url)
        .await
        .and_then(|raw| StringTable::from_json(&strings_url, &raw))
        .unwrap_or_else(|err| {
            gloo::console::warn!("gallery: strings unavailable", err.to_string());
            StringTable::default()
        });

    let titles_url = config.titles_url();
    let titles = fetch_text(&titles_url)
        .await
        .and_then(|raw| PhotoTitles::from_json(&titles_url, &raw))
        .unwrap_or_else(|err| {
            gloo::console::warn!("gallery: photo titles unavailable", err.to_string());
            PhotoTitles::default()
        });

    (strings, titles)
}

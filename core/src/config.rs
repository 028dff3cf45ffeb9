use crate::locale::Locale;

pub const PAGE_SIZE: usize = 25;

pub const MANIFEST_PATH: &str = "photos/photos.json";
pub const STRINGS_PATH: &str = "i18n/strings.json";
pub const PHOTO_TITLES_PATH: &str = "i18n/photos.json";

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LOCALE_STORAGE_KEY: &str = "lang";

pub const SWIPE_MIN_DISTANCE_PX: f64 = 40.0;
pub const SWIPE_MAX_VERTICAL_PX: f64 = 60.0;
pub const SWIPE_MAX_DURATION_MS: f64 = 800.0;
pub const TOUCH_MOVE_SLOP_PX: f64 = 8.0;

/// Where pre-generated renditions live relative to the asset base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetLayout {
    pub base: String,
    pub thumb_dir: String,
    pub full_dir: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            base: String::new(),
            thumb_dir: "photos/thumb".to_string(),
            full_dir: "photos/full".to_string(),
        }
    }
}

impl AssetLayout {
    pub fn with_base(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            ..Self::default()
        }
    }

    pub fn thumb_url(&self, key: &str, ext: &str) -> String {
        format!("{}{}/{key}.{ext}", self.base, self.thumb_dir)
    }

    pub fn full_url(&self, key: &str, ext: &str) -> String {
        format!("{}{}/{key}.{ext}", self.base, self.full_dir)
    }

    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}/", trimmed.trim_end_matches('/'))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeThresholds {
    pub min_distance: f64,
    pub max_vertical: f64,
    pub max_duration_ms: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            min_distance: SWIPE_MIN_DISTANCE_PX,
            max_vertical: SWIPE_MAX_VERTICAL_PX,
            max_duration_ms: SWIPE_MAX_DURATION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub page_size: usize,
    pub manifest_path: String,
    pub strings_path: String,
    pub titles_path: String,
    pub layout: AssetLayout,
    pub swipe: SwipeThresholds,
    pub default_locale: Locale,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            manifest_path: MANIFEST_PATH.to_string(),
            strings_path: STRINGS_PATH.to_string(),
            titles_path: PHOTO_TITLES_PATH.to_string(),
            layout: AssetLayout::default(),
            swipe: SwipeThresholds::default(),
            default_locale: Locale::default(),
        }
    }
}

impl GalleryConfig {
    pub fn with_asset_base(base: Option<&str>) -> Self {
        let layout = base.map(AssetLayout::with_base).unwrap_or_default();
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn manifest_url(&self) -> String {
        self.layout.resolve(&self.manifest_path)
    }

    pub fn strings_url(&self) -> String {
        self.layout.resolve(&self.strings_path)
    }

    pub fn titles_url(&self) -> String {
        self.layout.resolve(&self.titles_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_base_gets_single_trailing_slash() {
        let config = GalleryConfig::with_asset_base(Some("https://cdn.example.org/gallery//"));
        assert_eq!(
            config.manifest_url(),
            "https://cdn.example.org/gallery/photos/photos.json"
        );
        assert_eq!(
            config.layout.thumb_url("a", "webp"),
            "https://cdn.example.org/gallery/photos/thumb/a.webp"
        );
    }

    #[test]
    fn blank_base_keeps_paths_relative() {
        let config = GalleryConfig::with_asset_base(Some("  "));
        assert_eq!(config.strings_url(), "i18n/strings.json");
        assert_eq!(GalleryConfig::default().titles_url(), "i18n/photos.json");
    }
}

pub mod config;
pub mod error;
pub mod focus;
pub mod gesture;
pub mod i18n;
pub mod lightbox;
pub mod locale;
pub mod manifest;
pub mod pagination;
pub mod photo;
pub mod preferences;
pub mod state;
pub mod theme;

pub use config::{AssetLayout, GalleryConfig, SwipeThresholds, PAGE_SIZE};
pub use error::GalleryError;
pub use focus::trap_tab;
pub use gesture::SwipeGesture;
pub use i18n::{site_texts, PhotoTitles, SiteTexts, StringTable};
pub use lightbox::{key_action, wrap_index, Direction, Lightbox, LightboxKey};
pub use locale::{Locale, LOCALES};
pub use manifest::{check_status, parse_manifest};
pub use pagination::{
    page_for, page_param, page_range, page_strip, parse_page_param, total_pages, PageItem,
};
pub use photo::{build_photos, key_from_filename, natural_cmp, Photo};
pub use preferences::{
    load_locale, load_theme, save_locale, save_theme, MemoryStore, PreferenceStore,
};
pub use state::{GalleryState, LoadStatus};
pub use theme::{default_theme, Theme, ThemeHints};

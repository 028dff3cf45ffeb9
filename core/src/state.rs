use std::ops::Range;

use crate::config::GalleryConfig;
use crate::i18n::{PhotoTitles, StringTable};
use crate::lightbox::{Direction, Lightbox};
use crate::locale::Locale;
use crate::pagination::{page_for, page_range, page_strip, total_pages, PageItem};
use crate::photo::Photo;
use crate::theme::Theme;

/// Manifest load progress as shown in the gallery container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Everything the gallery renders from.
#[derive(Clone, Debug)]
pub struct GalleryState {
    pub config: GalleryConfig,
    pub photos: Vec<Photo>,
    pub strings: StringTable,
    pub titles: PhotoTitles,
    pub locale: Locale,
    pub theme: Theme,
    pub page: usize,
    pub lightbox: Lightbox,
    pub status: LoadStatus,
}

impl GalleryState {
    pub fn new(config: GalleryConfig, locale: Locale, theme: Theme) -> Self {
        Self {
            config,
            photos: Vec::new(),
            strings: StringTable::default(),
            titles: PhotoTitles::default(),
            locale,
            theme,
            page: 1,
            lightbox: Lightbox::Closed,
            status: LoadStatus::Loading,
        }
    }

    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
        self.status = LoadStatus::Ready;
        self.lightbox = Lightbox::Closed;
        self.page = page_for(self.page, self.photos.len(), self.config.page_size);
    }

    pub fn fail(&mut self, message: String) {
        self.photos.clear();
        self.lightbox = Lightbox::Closed;
        self.page = 1;
        self.status = LoadStatus::Failed(message);
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.photos.len(), self.config.page_size)
    }

    /// Clamps and stores the page, returning the value actually used.
    pub fn set_page(&mut self, requested: usize) -> usize {
        self.page = page_for(requested, self.photos.len(), self.config.page_size);
        self.page
    }

    pub fn visible_range(&self) -> Range<usize> {
        page_range(self.page, self.photos.len(), self.config.page_size)
    }

    /// `(global index, photo)` pairs on the current page.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Photo)> {
        let range = self.visible_range();
        let start = range.start;
        self.photos[range]
            .iter()
            .enumerate()
            .map(move |(offset, photo)| (start + offset, photo))
    }

    pub fn page_strip(&self) -> Vec<PageItem> {
        page_strip(self.page, self.total_pages())
    }

    pub fn open_lightbox(&mut self, index: usize) -> bool {
        self.lightbox.open(index, self.photos.len())
    }

    pub fn step_lightbox(&mut self, direction: Direction) -> Option<usize> {
        self.lightbox.step(direction, self.photos.len())
    }

    pub fn close_lightbox(&mut self) -> bool {
        self.lightbox.close()
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        self.lightbox.index().and_then(|index| self.photos.get(index))
    }

    pub fn caption<'a>(&'a self, photo: &'a Photo) -> &'a str {
        self.titles.caption(&photo.key, self.locale)
    }

    pub fn text<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.strings.text(key, self.locale, fallback)
    }
}

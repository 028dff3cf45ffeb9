use std::cell::RefCell;
use std::rc::Rc;

use gallery_core::{
    save_locale, save_theme, Direction, GalleryConfig, GalleryState, Locale, Photo, PhotoTitles,
    PreferenceStore, StringTable, Theme,
};

use crate::app_router;
use crate::document;

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Single owner of the gallery state. Components hold an `Rc<GalleryCore>`
/// and re-render through subscriptions.
pub(crate) struct GalleryCore {
    state: RefCell<GalleryState>,
    store: Box<dyn PreferenceStore>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        self.subscribers
            .borrow_mut()
            .retain(|entry| !Rc::ptr_eq(entry, &self.subscriber));
    }
}

impl GalleryCore {
    pub(crate) fn new(
        config: GalleryConfig,
        locale: Locale,
        theme: Theme,
        store: Box<dyn PreferenceStore>,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(GalleryState::new(config, locale, theme)),
            store,
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    /// Read access for rendering. Do not call mutating methods from `read`.
    pub(crate) fn read<R>(&self, reader: impl FnOnce(&GalleryState) -> R) -> R {
        reader(&self.state.borrow())
    }

    pub(crate) fn set_translations(&self, strings: StringTable, titles: PhotoTitles) {
        let mut state = self.state.borrow_mut();
        state.strings = strings;
        state.titles = titles;
        drop(state);
        self.notify();
    }

    pub(crate) fn set_photos(&self, photos: Vec<Photo>) {
        let mut state = self.state.borrow_mut();
        state.set_photos(photos);
        let requested = app_router::page_from_location();
        let page = state.set_page(requested);
        drop(state);
        app_router::replace_page_param(page);
        self.notify();
    }

    pub(crate) fn fail_load(&self, message: String) {
        self.state.borrow_mut().fail(message);
        self.notify();
    }

    pub(crate) fn go_to_page(&self, requested: usize) {
        let mut state = self.state.borrow_mut();
        let previous = state.page;
        let page = state.set_page(requested);
        drop(state);
        app_router::replace_page_param(page);
        if page != previous {
            self.notify();
        }
    }

    pub(crate) fn open_lightbox(&self, index: usize) {
        let opened = self.state.borrow_mut().open_lightbox(index);
        if !opened {
            gloo::console::warn!("gallery: lightbox index out of range", index as u32);
            return;
        }
        self.notify();
    }

    pub(crate) fn step_lightbox(&self, direction: Direction) {
        let stepped = self.state.borrow_mut().step_lightbox(direction);
        if stepped.is_some() {
            self.notify();
        }
    }

    pub(crate) fn close_lightbox(&self) {
        let closed = self.state.borrow_mut().close_lightbox();
        if closed {
            self.notify();
        }
    }

    pub(crate) fn set_theme(&self, theme: Theme) {
        let mut state = self.state.borrow_mut();
        state.theme = theme;
        drop(state);
        save_theme(self.store.as_ref(), theme);
        document::apply_theme(theme);
        self.notify();
    }

    pub(crate) fn toggle_theme(&self) {
        let next = self.read(|state| state.theme.toggled());
        self.set_theme(next);
    }

    pub(crate) fn set_locale(&self, locale: Locale) {
        let mut state = self.state.borrow_mut();
        if state.locale == locale {
            return;
        }
        state.locale = locale;
        drop(state);
        save_locale(self.store.as_ref(), locale);
        self.notify();
    }

    pub(crate) fn cycle_locale(&self) {
        let next = self.read(|state| state.locale.next());
        self.set_locale(next);
    }
}

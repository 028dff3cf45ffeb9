use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use gallery_core::i18n::LOAD_ERROR_FALLBACK;
use gallery_core::{load_locale, load_theme, site_texts, LoadStatus, Locale, Theme};

use crate::app_core::GalleryCore;
use crate::app_router;
use crate::document;
use crate::gallery_view::{CardModel, GalleryGrid};
use crate::lightbox_view::{Lightbox, LightboxLabels, LightboxPhoto};
use crate::loader;
use crate::local_store::LocalStore;
use crate::pagination_view::Pagination;

#[derive(Properties)]
pub(crate) struct AppProps {
    pub(crate) core: Rc<GalleryCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

/// Resolves preferences and paints the theme before the first render.
pub(crate) fn bootstrap() -> Rc<GalleryCore> {
    let config = app_router::load_config();
    let store = LocalStore::open();
    let theme = load_theme(&store, document::theme_hints());
    document::apply_theme(theme);
    let locale = load_locale(&store, config.default_locale);
    GalleryCore::new(config, locale, theme, Box::new(store))
}

async fn load_gallery(core: Rc<GalleryCore>) {
    let config = core.read(|state| state.config.clone());
    let (strings, titles) = loader::load_translations(&config).await;
    core.set_translations(strings, titles);
    match loader::load_photos(&config).await {
        Ok(photos) => {
            gloo::console::log!("gallery: manifest loaded", photos.len() as u32);
            core.set_photos(photos);
        }
        Err(err) => {
            gloo::console::error!("gallery: manifest failed", err.to_string());
            core.fail_load(err.to_string());
        }
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    title: AttrValue,
    subtitle: AttrValue,
    theme: Theme,
    theme_label: AttrValue,
    locale: Locale,
    on_theme_toggle: Callback<MouseEvent>,
    on_lang_toggle: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let sun_style = if props.theme == Theme::Light { "display: block" } else { "display: none" };
    let moon_style = if props.theme == Theme::Dark { "display: block" } else { "display: none" };
    html! {
        <header class="site-header">
            <div class="site-header__text">
                <h1 id="siteTitle">{ props.title.clone() }</h1>
                <p id="siteSubtitle">{ props.subtitle.clone() }</p>
            </div>
            <div class="site-header__controls">
                <button
                    id="langToggle"
                    class="icon-btn"
                    type="button"
                    aria-label={props.locale.code()}
                    onclick={props.on_lang_toggle.clone()}
                >
                    <span id="langFlag">{ props.locale.flag() }</span>
                </button>
                <button
                    id="themeToggle"
                    class="icon-btn"
                    type="button"
                    aria-label={props.theme_label.clone()}
                    onclick={props.on_theme_toggle.clone()}
                >
                    <svg id="iconSun" style={sun_style} viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
                        <circle cx="12" cy="12" r="5" fill="currentColor" />
                    </svg>
                    <svg id="iconMoon" style={moon_style} viewBox="0 0 24 24" width="20" height="20" aria-hidden="true">
                        <path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z" fill="currentColor" />
                    </svg>
                </button>
            </div>
        </header>
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let update = use_force_update();

    {
        let core = core.clone();
        use_effect_with((), move |_| {
            let subscription = core.subscribe(Rc::new(move || update.force_update()));
            if core.read(|state| state.status == LoadStatus::Loading) {
                spawn_local(load_gallery(core));
            }
            move || drop(subscription)
        });
    }

    let year = document::current_year();
    let view = core.read(|state| {
        let texts = site_texts(&state.strings, state.locale, year);
        let cards: Vec<CardModel> = state
            .visible()
            .map(|(index, photo)| CardModel {
                index,
                photo: photo.clone(),
                caption: state.caption(photo).to_string(),
            })
            .collect();
        let current = state.lightbox.index().and_then(|index| {
            let photo = state.photos.get(index)?;
            Some(LightboxPhoto {
                index,
                photo: photo.clone(),
                caption: state.caption(photo).to_string(),
            })
        });
        let theme_label = match state.theme {
            Theme::Light => state.text("ui.theme_light", "Light theme"),
            Theme::Dark => state.text("ui.theme_dark", "Dark theme"),
        };
        AppView {
            locale: state.locale,
            theme: state.theme,
            theme_label: theme_label.to_string(),
            texts,
            status: state.status.clone(),
            cards,
            pages: state.page_strip(),
            current,
            swipe: state.config.swipe,
            error_prefix: state.text("load_error", LOAD_ERROR_FALLBACK).to_string(),
            prev_page: state.text("prevPage", "Предыдущая страница").to_string(),
            next_page: state.text("nextPage", "Следующая страница").to_string(),
            lightbox_labels: LightboxLabels {
                close: state.text("close", "Закрыть").to_string(),
                prev: state.text("prev", "Предыдущее").to_string(),
                next: state.text("next", "Следующее").to_string(),
            },
        }
    });

    {
        let texts = view.texts.clone();
        use_effect_with((view.locale, texts), move |(locale, texts)| {
            document::apply_site_texts(*locale, texts);
            || ()
        });
    }

    let on_theme_toggle = {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| core.toggle_theme())
    };
    let on_lang_toggle = {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| core.cycle_locale())
    };

    let footer_line1 = view.texts.footer_line1.clone().map(|line| html! {
        <p id="footerL1">{ line }</p>
    });
    let footer_line2 = view.texts.footer_line2.clone().map(|line| html! {
        <p id="footerL2">{ Html::from_html_unchecked(AttrValue::from(line)) }</p>
    });

    html! {
        <>
            <Header
                title={view.texts.title.clone()}
                subtitle={view.texts.subtitle.clone()}
                theme={view.theme}
                theme_label={view.theme_label.clone()}
                locale={view.locale}
                on_theme_toggle={on_theme_toggle}
                on_lang_toggle={on_lang_toggle}
            />
            <main class="app">
                <GalleryGrid
                    core={core.clone()}
                    status={view.status.clone()}
                    cards={view.cards.clone()}
                    error_prefix={view.error_prefix.clone()}
                />
                <Pagination
                    core={core.clone()}
                    items={view.pages.clone()}
                    prev_label={view.prev_page.clone()}
                    next_label={view.next_page.clone()}
                />
            </main>
            <footer class="site-footer">
                {footer_line1}
                {footer_line2}
                <p class="site-footer__year">{ "© " }<span id="year">{ year.to_string() }</span></p>
            </footer>
            <Lightbox
                core={core}
                current={view.current.clone()}
                labels={view.lightbox_labels.clone()}
                swipe={view.swipe}
            />
        </>
    }
}

/// Render inputs gathered in one borrow of the state.
struct AppView {
    locale: Locale,
    theme: Theme,
    theme_label: String,
    texts: gallery_core::SiteTexts,
    status: LoadStatus,
    cards: Vec<CardModel>,
    pages: Vec<gallery_core::PageItem>,
    current: Option<LightboxPhoto>,
    swipe: gallery_core::SwipeThresholds,
    error_prefix: String,
    prev_page: String,
    next_page: String,
    lightbox_labels: LightboxLabels,
}

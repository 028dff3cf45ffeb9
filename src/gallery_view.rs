use std::rc::Rc;

use yew::prelude::*;

use gallery_core::{LoadStatus, Photo};

use crate::app_core::GalleryCore;

#[derive(Clone, PartialEq)]
pub(crate) struct CardModel {
    pub(crate) index: usize,
    pub(crate) photo: Photo,
    pub(crate) caption: String,
}

#[derive(Properties)]
pub(crate) struct GalleryGridProps {
    pub(crate) core: Rc<GalleryCore>,
    pub(crate) status: LoadStatus,
    pub(crate) cards: Vec<CardModel>,
    pub(crate) error_prefix: String,
}

impl PartialEq for GalleryGridProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && self.status == other.status
            && self.cards == other.cards
            && self.error_prefix == other.error_prefix
    }
}

#[derive(Properties, PartialEq)]
struct PictureProps {
    webp: AttrValue,
    jpg: AttrValue,
    alt: AttrValue,
    #[prop_or_default]
    class: Classes,
}

/// `<picture>` with a WebP source and a JPEG `<img>` fallback.
#[function_component(Picture)]
fn picture(props: &PictureProps) -> Html {
    html! {
        <picture class={props.class.clone()}>
            <source type="image/webp" srcset={props.webp.clone()} />
            <img
                loading="lazy"
                decoding="async"
                src={props.jpg.clone()}
                alt={props.alt.clone()}
            />
        </picture>
    }
}

#[function_component(GalleryGrid)]
pub(crate) fn gallery_grid(props: &GalleryGridProps) -> Html {
    let body = match &props.status {
        LoadStatus::Loading => html! {},
        LoadStatus::Failed(message) => html! {
            <p role="alert" class="gallery__error">
                { format!("{}: {}", props.error_prefix, message) }
            </p>
        },
        LoadStatus::Ready => props
            .cards
            .iter()
            .map(|card| {
                let on_click = {
                    let core = props.core.clone();
                    let index = card.index;
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        core.open_lightbox(index);
                    })
                };
                html! {
                    <article class="card" key={card.index}>
                        <a
                            class="card__imgwrap"
                            href={card.photo.full_jpg.clone()}
                            onclick={on_click}
                        >
                            <Picture
                                webp={card.photo.thumb_webp.clone()}
                                jpg={card.photo.thumb_jpg.clone()}
                                alt={card.caption.clone()}
                            />
                        </a>
                        <div class="card__caption">{ card.caption.clone() }</div>
                    </article>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <section id="gallery" class="gallery" aria-busy={(props.status == LoadStatus::Loading).to_string()}>
            {body}
        </section>
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node, TouchEvent};
use yew::prelude::*;

use gallery_core::{
    key_action, trap_tab, Direction, LightboxKey, Photo, SwipeGesture, SwipeThresholds,
};

use crate::app_core::GalleryCore;
use crate::document;

#[derive(Clone, PartialEq)]
pub(crate) struct LightboxPhoto {
    pub(crate) index: usize,
    pub(crate) photo: Photo,
    pub(crate) caption: String,
}

#[derive(Clone, PartialEq)]
pub(crate) struct LightboxLabels {
    pub(crate) close: String,
    pub(crate) prev: String,
    pub(crate) next: String,
}

#[derive(Properties)]
pub(crate) struct LightboxProps {
    pub(crate) core: Rc<GalleryCore>,
    pub(crate) current: Option<LightboxPhoto>,
    pub(crate) labels: LightboxLabels,
    pub(crate) swipe: SwipeThresholds,
}

impl PartialEq for LightboxProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && self.current == other.current
            && self.labels == other.labels
            && self.swipe == other.swipe
    }
}

/// Everything that only exists while the viewer is open. Dropping it undoes
/// the scroll lock, removes listeners and gives focus back.
struct LightboxSession {
    previous_focus: Option<HtmlElement>,
    _listeners: Vec<EventListener>,
}

impl LightboxSession {
    fn start(
        core: Rc<GalleryCore>,
        dialog: Element,
        close_button: Option<HtmlElement>,
        swipe: SwipeThresholds,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let previous_focus = document::active_element();
        document::set_scroll_locked(true);

        let blocking = EventListenerOptions::enable_prevent_default();
        let gesture = Rc::new(RefCell::new(SwipeGesture::new(swipe)));
        let mut listeners = Vec::with_capacity(5);

        {
            let core = core.clone();
            let dialog = dialog.clone();
            listeners.push(EventListener::new_with_options(
                &window,
                "keydown",
                blocking,
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let Some(action) = key_action(&event.key(), event.shift_key()) else {
                        return;
                    };
                    match action {
                        LightboxKey::Close => {
                            event.prevent_default();
                            core.close_lightbox();
                        }
                        LightboxKey::Step(direction) => {
                            event.prevent_default();
                            core.step_lightbox(direction);
                        }
                        LightboxKey::FocusNext => trap_focus(&dialog, event, false),
                        LightboxKey::FocusPrev => trap_focus(&dialog, event, true),
                    }
                },
            ));
        }

        {
            let dialog = dialog.clone();
            listeners.push(EventListener::new_with_options(
                &document,
                "touchmove",
                blocking,
                move |event: &Event| {
                    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                    if !dialog.contains(target.as_ref()) {
                        event.prevent_default();
                    }
                },
            ));
        }

        {
            let gesture = gesture.clone();
            listeners.push(EventListener::new(&dialog, "touchstart", move |event: &Event| {
                let Some((x, y)) = first_changed_touch(event) else {
                    return;
                };
                gesture.borrow_mut().arm(x, y, document::now_ms());
            }));
        }

        {
            let gesture = gesture.clone();
            listeners.push(EventListener::new_with_options(
                &dialog,
                "touchmove",
                blocking,
                move |event: &Event| {
                    let Some((x, y)) = first_changed_touch(event) else {
                        return;
                    };
                    let gesture = gesture.borrow();
                    if gesture.is_active() && gesture.should_block_move(x, y) {
                        event.prevent_default();
                    }
                },
            ));
        }

        listeners.push(EventListener::new(&dialog, "touchend", move |event: &Event| {
            let Some((x, y)) = first_changed_touch(event) else {
                return;
            };
            let swiped = gesture.borrow_mut().finish(x, y, document::now_ms());
            if let Some(direction) = swiped {
                core.step_lightbox(direction);
            }
        }));

        if let Some(button) = close_button {
            let _ = button.focus();
        }

        Some(Self {
            previous_focus,
            _listeners: listeners,
        })
    }
}

impl Drop for LightboxSession {
    fn drop(&mut self) {
        document::set_scroll_locked(false);
        if let Some(element) = self.previous_focus.take() {
            if element.is_connected() {
                let _ = element.focus();
            }
        }
    }
}

fn first_changed_touch(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Keeps Tab inside the dialog, wrapping at either end.
fn trap_focus(dialog: &Element, event: &KeyboardEvent, backwards: bool) {
    let nodes = document::focusable_within(dialog);
    let active = document::active_element();
    let inside = active
        .as_ref()
        .map(|element| dialog.contains(Some(element.as_ref())))
        .unwrap_or(false);
    let position = if inside {
        let Some(position) = nodes
            .iter()
            .position(|node| Some(node) == active.as_ref())
        else {
            return;
        };
        Some(position)
    } else {
        None
    };
    if let Some(target) = trap_tab(nodes.len(), position, backwards) {
        event.prevent_default();
        let _ = nodes[target].focus();
    }
}

#[function_component(Lightbox)]
pub(crate) fn lightbox(props: &LightboxProps) -> Html {
    let dialog_ref = use_node_ref();
    let close_ref = use_node_ref();
    // Index whose WebP failed; the JPEG is used for it and the handler disarms.
    let webp_failed = use_state(|| None::<usize>);
    let is_open = props.current.is_some();

    {
        let core = props.core.clone();
        let dialog_ref = dialog_ref.clone();
        let close_ref = close_ref.clone();
        let swipe = props.swipe;
        use_effect_with(is_open, move |is_open| {
            let session = if *is_open {
                dialog_ref.cast::<Element>().and_then(|dialog| {
                    LightboxSession::start(core, dialog, close_ref.cast::<HtmlElement>(), swipe)
                })
            } else {
                None
            };
            move || drop(session)
        });
    }

    let on_backdrop_click = {
        let core = props.core.clone();
        let dialog_ref = dialog_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let target = event.target_dyn_into::<Element>();
            let dialog = dialog_ref.cast::<Element>();
            if target.is_some() && target == dialog {
                core.close_lightbox();
            }
        })
    };
    let on_close = {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| core.close_lightbox())
    };
    let on_prev = {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| core.step_lightbox(Direction::Prev))
    };
    let on_next = {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| core.step_lightbox(Direction::Next))
    };

    let content = match props.current.as_ref() {
        Some(current) => {
            let use_jpg = *webp_failed == Some(current.index);
            let src = if use_jpg {
                current.photo.full_jpg.clone()
            } else {
                current.photo.full_webp.clone()
            };
            let on_error = {
                let webp_failed = webp_failed.clone();
                let index = current.index;
                Callback::from(move |_: Event| {
                    if *webp_failed != Some(index) {
                        gloo::console::log!("gallery: webp failed, using jpeg", index as u32);
                        webp_failed.set(Some(index));
                    }
                })
            };
            html! {
                <figure class="lightbox__frame">
                    <img
                        id="lightboxImg"
                        class="lightbox__img"
                        src={src}
                        alt={current.caption.clone()}
                        decoding="async"
                        onerror={on_error}
                    />
                    <figcaption id="lightboxCaption" class="lightbox__caption">
                        { current.caption.clone() }
                    </figcaption>
                </figure>
            }
        }
        None => html! {},
    };

    html! {
        <div
            id="lightbox"
            class="lightbox"
            role="dialog"
            aria-modal="true"
            hidden={!is_open}
            ref={dialog_ref}
            onclick={on_backdrop_click}
        >
            <button
                id="lightboxClose"
                class="lightbox__btn close"
                type="button"
                aria-label={props.labels.close.clone()}
                ref={close_ref}
                onclick={on_close}
            >
                { "×" }
            </button>
            <button
                id="lightboxPrev"
                class="lightbox__btn prev"
                type="button"
                aria-label={props.labels.prev.clone()}
                onclick={on_prev}
            >
                { "‹" }
            </button>
            {content}
            <button
                id="lightboxNext"
                class="lightbox__btn next"
                type="button"
                aria-label={props.labels.next.clone()}
                onclick={on_next}
            >
                { "›" }
            </button>
        </div>
    }
}

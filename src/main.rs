mod app_core;
mod app_router;
mod document;
mod gallery_view;
mod lightbox_view;
mod loader;
mod local_store;
mod pagination_view;
mod yew_app;

use yew_app::{App, AppProps};

fn main() {
    let core = yew_app::bootstrap();
    yew::Renderer::<App>::with_props(AppProps { core }).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use gallery_core::{
        parse_manifest, AssetLayout, GalleryConfig, LoadStatus, Locale, MemoryStore, Theme,
    };
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{
        Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent, KeyboardEventInit, Touch,
        TouchEvent, TouchEventInit, TouchInit,
    };
    use yew::AppHandle;

    use crate::app_core::GalleryCore;
    use crate::gallery_view::{GalleryGrid, GalleryGridProps};

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_core() -> Rc<GalleryCore> {
        GalleryCore::new(
            GalleryConfig::default(),
            Locale::De,
            Theme::Light,
            Box::new(MemoryStore::new()),
        )
    }

    fn mount_point() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    async fn mount_app(manifest: &str) -> (Rc<GalleryCore>, Element, AppHandle<App>) {
        let core = test_core();
        let photos =
            parse_manifest("photos/photos.json", manifest, &AssetLayout::default()).unwrap();
        core.set_photos(photos);
        let root = mount_point();
        let app = yew::Renderer::<App>::with_root_and_props(
            root.clone(),
            AppProps { core: core.clone() },
        )
        .render();
        settle().await;
        (core, root, app)
    }

    fn find<T: JsCast>(root: &Element, selector: &str) -> T {
        root.query_selector(selector).unwrap().unwrap().dyn_into::<T>().unwrap()
    }

    fn active_element() -> Option<Element> {
        web_sys::window().unwrap().document().unwrap().active_element()
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    fn touch_event(kind: &str, target: &Element, x: f64, y: f64) -> Option<TouchEvent> {
        let init = TouchInit::new(1, target);
        init.set_client_x(x as i32);
        init.set_client_y(y as i32);
        let touch = Touch::new(&init).ok()?;
        let event_init = TouchEventInit::new();
        event_init.set_changed_touches(&js_sys::Array::of1(&touch));
        event_init.set_cancelable(true);
        TouchEvent::new_with_event_init_dict(kind, &event_init).ok()
    }

    const THREE_PHOTOS: &str = r#"["img-1.png","img-2.png","img-3.png"]"#;

    #[wasm_bindgen_test]
    async fn failed_manifest_renders_inline_error() {
        let root = mount_point();
        let props = GalleryGridProps {
            core: test_core(),
            status: LoadStatus::Failed(
                "request to photos/photos.json failed with status 404".into(),
            ),
            cards: Vec::new(),
            error_prefix: "Ошибка загрузки галереи".into(),
        };
        let app = yew::Renderer::<GalleryGrid>::with_root_and_props(root.clone(), props).render();
        settle().await;

        let alert = root.query_selector("#gallery [role=alert]").unwrap().unwrap();
        let text = alert.text_content().unwrap_or_default();
        assert!(text.starts_with("Ошибка загрузки галереи: "));
        assert!(text.contains("404"));
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn photos_sharing_a_stem_render_as_separate_cards() {
        let (_core, root, app) = mount_app(r#"["bear.png","bear.jpg","fox.png"]"#).await;

        let captions = root.query_selector_all(".card__caption").unwrap();
        let texts: Vec<String> = (0..captions.length())
            .filter_map(|idx| captions.item(idx))
            .filter_map(|node| node.text_content())
            .collect();
        assert_eq!(texts, ["fox", "bear", "bear"]);
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn arrow_left_from_first_photo_wraps_and_escape_closes() {
        let (core, root, app) = mount_app(THREE_PHOTOS).await;

        let cards = root.query_selector_all("article.card").unwrap();
        assert_eq!(cards.length(), 3);

        core.open_lightbox(0);
        settle().await;
        let dialog = root.query_selector("#lightbox").unwrap().unwrap();
        assert!(!dialog.has_attribute("hidden"));

        press("ArrowLeft");
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), Some(2));
        let caption = root.query_selector("#lightboxCaption").unwrap().unwrap();
        assert_eq!(caption.text_content().as_deref(), Some("img-1"));

        press("Escape");
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), None);
        assert!(dialog.has_attribute("hidden"));
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn only_a_click_on_the_backdrop_closes() {
        let (core, root, app) = mount_app(THREE_PHOTOS).await;
        core.open_lightbox(0);
        settle().await;

        find::<HtmlElement>(&root, "#lightboxImg").click();
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), Some(0));

        find::<HtmlElement>(&root, "#lightboxPrev").click();
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), Some(2));

        find::<HtmlElement>(&root, "#lightbox").click();
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), None);
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn focus_moves_to_close_button_and_returns_to_card() {
        let (core, root, app) = mount_app(THREE_PHOTOS).await;
        let link: HtmlElement = find(&root, "a.card__imgwrap");
        link.focus().unwrap();
        link.click();
        settle().await;

        assert_eq!(core.read(|state| state.lightbox.index()), Some(0));
        let focused = active_element().map(|element| element.id());
        assert_eq!(focused.as_deref(), Some("lightboxClose"));

        press("Escape");
        settle().await;
        let link: Element = link.unchecked_into();
        assert_eq!(active_element(), Some(link));
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn webp_error_switches_to_jpeg_once() {
        let (core, root, app) = mount_app(THREE_PHOTOS).await;
        core.open_lightbox(0);
        settle().await;

        let img: HtmlImageElement = find(&root, "#lightboxImg");
        img.dispatch_event(&Event::new("error").unwrap()).unwrap();
        settle().await;
        assert!(img.src().ends_with("photos/full/img-3.jpg"));

        img.dispatch_event(&Event::new("error").unwrap()).unwrap();
        settle().await;
        assert!(img.src().ends_with("photos/full/img-3.jpg"));
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn left_swipe_shows_next_photo() {
        let (core, root, app) = mount_app(THREE_PHOTOS).await;
        core.open_lightbox(0);
        settle().await;

        let dialog = root.query_selector("#lightbox").unwrap().unwrap();
        let (Some(start), Some(end)) = (
            touch_event("touchstart", &dialog, 200.0, 300.0),
            touch_event("touchend", &dialog, 100.0, 310.0),
        ) else {
            // Engines without touch support cannot build the events.
            app.destroy();
            root.remove();
            return;
        };
        dialog.dispatch_event(&start).unwrap();
        dialog.dispatch_event(&end).unwrap();
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), Some(1));

        let start = touch_event("touchstart", &dialog, 100.0, 300.0).unwrap();
        let end = touch_event("touchend", &dialog, 120.0, 300.0).unwrap();
        dialog.dispatch_event(&start).unwrap();
        dialog.dispatch_event(&end).unwrap();
        settle().await;
        assert_eq!(core.read(|state| state.lightbox.index()), Some(1));
        app.destroy();
        root.remove();
    }
}

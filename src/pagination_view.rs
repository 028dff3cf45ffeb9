use std::rc::Rc;

use yew::prelude::*;

use gallery_core::PageItem;

use crate::app_core::GalleryCore;

#[derive(Properties)]
pub(crate) struct PaginationProps {
    pub(crate) core: Rc<GalleryCore>,
    pub(crate) items: Vec<PageItem>,
    pub(crate) prev_label: String,
    pub(crate) next_label: String,
}

impl PartialEq for PaginationProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
            && self.items == other.items
            && self.prev_label == other.prev_label
            && self.next_label == other.next_label
    }
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let go_to = |target: usize| {
        let core = props.core.clone();
        Callback::from(move |_: MouseEvent| core.go_to_page(target))
    };

    let controls = props
        .items
        .iter()
        .map(|item| match *item {
            PageItem::Prev { target, disabled } => html! {
                <button
                    class="page-btn prev"
                    type="button"
                    data-pagination="prev"
                    aria-label={props.prev_label.clone()}
                    disabled={disabled}
                    onclick={go_to(target)}
                >
                    { "‹" }
                </button>
            },
            PageItem::Page { number, current } => html! {
                <button
                    class="page-btn"
                    type="button"
                    aria-current={current.then_some("page")}
                    onclick={go_to(number)}
                >
                    { number.to_string() }
                </button>
            },
            PageItem::Ellipsis => html! {
                <span class="page-btn" aria-hidden="true">{ "…" }</span>
            },
            PageItem::Next { target, disabled } => html! {
                <button
                    class="page-btn next"
                    type="button"
                    data-pagination="next"
                    aria-label={props.next_label.clone()}
                    disabled={disabled}
                    onclick={go_to(target)}
                >
                    { "›" }
                </button>
            },
        })
        .collect::<Html>();

    html! {
        <nav id="pagination" class="pagination" hidden={props.items.is_empty()}>
            {controls}
        </nav>
    }
}

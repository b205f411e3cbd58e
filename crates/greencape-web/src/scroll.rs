// File: src/scroll.rs
// Purpose: Smooth scrolling for in-page anchors

use crate::listen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id an anchor points at, or `None` for a bare `#`
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn jump(document: &Document, href: &str, event: &Event) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };
    event.prevent_default();

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
            tracing::debug!("pushState failed for {}: {:?}", href, e);
        }
    }
    if let Some(el) = target.dyn_ref::<HtmlElement>() {
        if let Err(e) = el.focus() {
            tracing::debug!("Could not focus #{}: {:?}", id, e);
        }
    }
}

pub fn init(document: &Document) -> usize {
    let Ok(anchors) = document.query_selector_all(ANCHOR_SELECTOR) else {
        return 0;
    };
    let mut wired = 0;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = document.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |e: Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            jump(&doc, &href, &e);
        });
        wired += 1;
    }
    wired
}

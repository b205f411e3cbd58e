//! Green Cape Town WASM
//!
//! Browser entry point for the site. On start it wires the three forms to
//! [`greencape_forms::FormController`]s through [`dom::DomUi`], then sets up
//! the mobile menu, statistic counters, card fade-in and anchor scrolling.
//! The validation predicates are also exported to JavaScript.

use greencape_forms::{evaluate, forms, FieldValue, FormSpec, FormValues, SiteConfig, UiPort};
use greencape_validation as core;
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList,
};

pub mod counter;
pub mod dom;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod timers;
pub mod wiring;

const SITE_CONFIG: &str = include_str!("../greencape.toml");

/// Embedded settings, or the built-in defaults if they do not parse
pub fn site_config() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_CONFIG).unwrap_or_else(|e| {
        tracing::warn!("Using default site config: {:#}", e);
        SiteConfig::default()
    })
}

/// Attach `handler` for `kind` events for the life of the page
pub(crate) fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        tracing::warn!("Failed to attach {} listener: {:?}", kind, e);
    }
    closure.forget();
}

/// Call `on_visible` whenever one of `elements` intersects the viewport.
/// Returns how many elements are being observed.
pub(crate) fn observe(
    elements: &NodeList,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(Element) + 'static,
) -> usize {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_visible(entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            tracing::warn!("IntersectionObserver unavailable: {:?}", e);
            return 0;
        }
    };
    callback.forget();

    let mut observed = 0;
    for i in 0..elements.length() {
        if let Some(el) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&el);
            observed += 1;
        }
    }
    observed
}

fn banner() {
    tracing::info!("Green Cape Town Website");
    tracing::info!("WEDE5020POE Project");
    tracing::info!("Planting the future, one tree at a time. 🌱");
}

fn init_page(document: &Document, config: &SiteConfig) {
    let ui: Rc<dyn UiPort> = Rc::new(dom::DomUi::new(document.clone()));
    let forms = wiring::init(document, ui, &config.forms);
    let menu = menu::init(document);
    let counters = counter::init(document, &config.motion);
    let cards = reveal::init(document, &config.motion);
    let anchors = scroll::init(document);
    tracing::debug!(
        "Page ready: {} forms, menu {}, {} counters, {} cards, {} anchors",
        forms,
        if menu { "on" } else { "off" },
        counters,
        cards,
        anchors
    );
}

/// Set up logging and wire the page once the DOM is parsed
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    banner();
    let config = site_config();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::error!("No document; nothing to wire");
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let mut config = Some(config);
        listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
            if let Some(config) = config.take() {
                init_page(&doc, &config);
            }
        });
    } else {
        init_page(&document, &config);
    }
}

/// Field error returned to JavaScript
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

fn collect_errors(spec: &FormSpec, raw: &HashMap<String, FieldValue>) -> Vec<ValidationError> {
    let mut values = FormValues::new();
    for rule in &spec.fields {
        if let Some(value) = raw.get(rule.id) {
            values.insert(rule.id, value.clone());
        }
    }
    evaluate(spec, &values)
        .failures()
        .filter_map(|outcome| {
            outcome.verdict.message().map(|message| ValidationError {
                field: outcome.field.to_string(),
                message: message.to_string(),
            })
        })
        .collect()
}

/// Validate a whole form without touching the page
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm('contact-form', {
///     'contact-name': 'Sipho',
///     'contact-email': 'sipho@example.org',
///     terms: true
/// });
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str, values: JsValue) -> Result<JsValue, JsValue> {
    let spec = forms::all()
        .into_iter()
        .find(|spec| spec.id == form_id)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown form '{}'", form_id)))?;
    let raw: HashMap<String, FieldValue> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    Ok(serde_wasm_bindgen::to_value(&collect_errors(&spec, &raw))?)
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(email: &str) -> bool {
    core::validate_email(email)
}

#[wasm_bindgen(js_name = validatePhone)]
pub fn validate_phone_js(phone: &str) -> bool {
    core::validate_phone(phone)
}

#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(name: &str) -> bool {
    core::validate_name(name)
}

#[wasm_bindgen(js_name = validateMessage)]
pub fn validate_message_js(message: &str, min_length: usize) -> bool {
    core::validate_message(message, min_length)
}

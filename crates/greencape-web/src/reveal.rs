// File: src/reveal.rs
// Purpose: Fade cards in as they scroll into view

use crate::observe;
use greencape_forms::MotionConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const REVEAL_SELECTOR: &str = ".card, .mvv-card, .involvement-card, .team-member";

/// Inline styles before the element is seen
pub const HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline styles once the element is seen
pub const SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

fn apply(element: &Element, styles: &[(&str, &str)]) {
    let Some(el) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    for (property, value) in styles {
        if let Err(e) = style.set_property(property, value) {
            tracing::debug!("Could not set {}: {:?}", property, e);
        }
    }
}

pub fn init(document: &Document, motion: &MotionConfig) -> usize {
    let Ok(cards) = document.query_selector_all(REVEAL_SELECTOR) else {
        return 0;
    };
    for i in 0..cards.length() {
        if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            apply(&card, &HIDDEN);
        }
    }
    observe(
        &cards,
        motion.fade_threshold,
        Some(&motion.fade_root_margin),
        |card: Element| apply(&card, &SHOWN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_undoes_hidden() {
        for (property, _) in SHOWN {
            assert!(HIDDEN.iter().any(|(p, _)| *p == property));
        }
    }
}

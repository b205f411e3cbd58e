// File: src/menu.rs
// Purpose: Mobile navigation toggle

use crate::listen;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

pub const TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const NAV_SELECTOR: &str = ".nav-list";
pub const OPEN_CLASS: &str = "active";

/// What happened on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClicked,
    LinkClicked,
    ClickedOutside,
}

/// Open or closed navigation list
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn next(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::ToggleClicked => Self { open: !self.open },
            MenuEvent::LinkClicked | MenuEvent::ClickedOutside => Self { open: false },
        }
    }

    /// Value for the toggle's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

struct Menu {
    toggle: Element,
    nav: Element,
}

impl Menu {
    fn state(&self) -> MenuState {
        MenuState::new(self.nav.class_list().contains(OPEN_CLASS))
    }

    fn apply(&self, event: MenuEvent) {
        let next = self.state().next(event);
        let classes = self.nav.class_list();
        let toggled = if next.is_open() {
            classes.add_1(OPEN_CLASS)
        } else {
            classes.remove_1(OPEN_CLASS)
        };
        let expanded = self.toggle.set_attribute("aria-expanded", next.aria_expanded());
        if let Err(e) = toggled.and(expanded) {
            tracing::warn!("Failed to update menu: {:?}", e);
        }
    }

    fn contains(&self, event: &Event) -> bool {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        self.toggle.contains(target.as_ref()) || self.nav.contains(target.as_ref())
    }
}

/// Attach the toggle, link and outside-click handlers. Returns false when
/// the page has no mobile menu.
pub fn init(document: &Document) -> bool {
    let toggle = document.query_selector(TOGGLE_SELECTOR).ok().flatten();
    let nav = document.query_selector(NAV_SELECTOR).ok().flatten();
    let (Some(toggle), Some(nav)) = (toggle, nav) else {
        return false;
    };
    let menu = Rc::new(Menu { toggle, nav });

    let on_toggle = menu.clone();
    listen(&menu.toggle, "click", move |_: Event| {
        on_toggle.apply(MenuEvent::ToggleClicked)
    });

    if let Ok(links) = menu.nav.query_selector_all("a") {
        for i in 0..links.length() {
            let Some(link) = links.item(i) else { continue };
            let menu = menu.clone();
            listen(&link, "click", move |_: Event| menu.apply(MenuEvent::LinkClicked));
        }
    }

    listen(document, "click", move |e: Event| {
        if !menu.contains(&e) {
            menu.apply(MenuEvent::ClickedOutside);
        }
    });

    tracing::debug!("Mobile menu ready");
    true
}

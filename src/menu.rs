//! Mobile hamburger menu.
//!
//! `.menu-toggle` opens and closes `.nav-links`. While open, page scrolling is
//! locked. Following a link or clicking outside the menu closes it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

pub const TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const LINKS_SELECTOR: &str = ".nav-links";
pub const ACTIVE_CLASS: &str = "active";

/// Everything that changes when the menu opens or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuVisual {
    pub icon_class: &'static str,
    pub aria_expanded: &'static str,
    /// Inline `overflow` for `<body>`; empty restores the stylesheet value.
    pub body_overflow: &'static str,
}

impl MenuVisual {
    #[must_use]
    pub fn for_open(open: bool) -> Self {
        if open {
            Self {
                icon_class: "fas fa-times",
                aria_expanded: "true",
                body_overflow: "hidden",
            }
        } else {
            Self {
                icon_class: "fas fa-bars",
                aria_expanded: "false",
                body_overflow: "",
            }
        }
    }
}

/// A document click closes the menu only when it lands outside both the
/// link list and the toggle.
#[must_use]
pub fn closes_on_click(open: bool, inside_links: bool, inside_toggle: bool) -> bool {
    open && !inside_links && !inside_toggle
}

#[cfg(feature = "browser")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement, Node};

    use super::{ACTIVE_CLASS, LINKS_SELECTOR, MenuVisual, TOGGLE_SELECTOR, closes_on_click};
    use crate::dom::{self, DomError};

    #[derive(Clone)]
    struct Menu {
        open: Rc<Cell<bool>>,
        toggle: HtmlElement,
        links: HtmlElement,
        body: HtmlElement,
    }

    impl Menu {
        fn set_open(&self, open: bool) {
            self.open.set(open);
            let visual = MenuVisual::for_open(open);
            dom::set_class(&self.links, ACTIVE_CLASS, open);
            if let Ok(Some(icon)) = self.toggle.query_selector("i") {
                icon.set_class_name(visual.icon_class);
            }
            if let Err(e) = self.toggle.set_attribute("aria-expanded", visual.aria_expanded) {
                log::warn!("failed to set aria-expanded: {e:?}");
            }
            dom::set_style(&self.body, "overflow", visual.body_overflow);
        }
    }

    fn contains(container: &Node, target: Option<&Node>) -> bool {
        target.is_some_and(|node| container.contains(Some(node)))
    }

    /// Attach the menu listeners. Requires both the toggle and the link list.
    ///
    /// # Errors
    ///
    /// Fails when a lookup throws or a listener cannot be attached.
    pub fn wire(document: &Document) -> Result<(), DomError> {
        let (Some(toggle), Some(links)) = (
            dom::query_html(document, TOGGLE_SELECTOR)?,
            dom::query_html(document, LINKS_SELECTOR)?,
        ) else {
            return Ok(());
        };
        let menu = Menu {
            open: Rc::new(Cell::new(false)),
            toggle,
            links,
            body: dom::body(document)?,
        };

        let toggle = menu.toggle.clone();
        {
            let menu = menu.clone();
            dom::listen(&toggle, "click", move |_| menu.set_open(!menu.open.get()))?;
        }

        for link in dom::query_all_in(&menu.links, "a")? {
            let menu = menu.clone();
            dom::listen(&link, "click", move |_| menu.set_open(false))?;
        }

        dom::listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_links = contains(&menu.links, target.as_ref());
            let inside_toggle = contains(&menu.toggle, target.as_ref());
            if closes_on_click(menu.open.get(), inside_links, inside_toggle) {
                menu.set_open(false);
            }
        })
    }
}

#[cfg(feature = "browser")]
pub use browser::wire;

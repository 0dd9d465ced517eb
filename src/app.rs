//! Page start-up.
//!
//! The WASM start hook waits for `DOMContentLoaded` (or runs at once if the
//! document already loaded), installs logging, and wires each behavior on its
//! own so a missing element or a browser quirk only disables that behavior.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;
#[cfg(feature = "browser")]
use web_sys::{Document, Window};

#[cfg(feature = "browser")]
use crate::config::{self, PageConfig};
#[cfg(feature = "browser")]
use crate::dom::{self, DomError};
#[cfg(feature = "browser")]
use crate::notify::Notifier;
#[cfg(feature = "browser")]
use crate::{anchors, contact, effects, menu, nav, particles, scroll, theme_dom};

/// Whether setup must wait for `DOMContentLoaded`, given `document.readyState`.
///
/// `interactive` and `complete` both mean the DOM is already parsed.
#[must_use]
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Ok(window) = dom::window() else {
        return;
    };
    let Ok(document) = dom::document(&window) else {
        return;
    };

    if waits_for_dom(&document.ready_state()) {
        let (win, doc) = (window.clone(), document.clone());
        if let Err(e) = dom::listen(&document, "DOMContentLoaded", move |_| setup(&win, &doc)) {
            web_sys::console::error_1(&format!("folio: failed to wait for DOMContentLoaded: {e}").into());
        }
    } else {
        setup(&window, &document);
    }
}

#[cfg(feature = "browser")]
fn setup(window: &Window, document: &Document) {
    let (config, config_error) = match config::read(document) {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("folio: console logger not installed: {e}").into());
    }
    if let Some(e) = config_error {
        log::warn!("{e}; using defaults");
    }

    if let Err(e) = theme_dom::mount(window, document, &config) {
        log::warn!("theme controller not mounted: {e}");
    }

    let notifier = Notifier::new(document.clone(), &config);
    report("navbar", nav::wire(window, document, &config));
    report("menu", menu::wire(document));
    report("anchors", anchors::wire(window, document, &config));
    report("contact form", contact::wire(document, &config, notifier));
    report("back to top", scroll::wire_back_to_top(window, document, &config));
    report("scroll animations", scroll::wire_reveal(document, &config));
    report("particles", particles::init(document, &config));
    report("skill tags", effects::wire_skill_tags(document));
    effects::schedule_preload(document, &config);

    log::info!("page behaviors ready");
}

#[cfg(feature = "browser")]
fn report(feature: &str, result: Result<(), DomError>) {
    if let Err(e) = result {
        log::warn!("{feature} not wired: {e}");
    }
}

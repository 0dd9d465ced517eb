//! Back-to-top control and reveal-on-scroll animations.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

pub const BACK_TO_TOP_SELECTOR: &str = ".back-to-top";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const VISIBLE_CLASS: &str = "visible";

#[must_use]
pub fn back_to_top_visible(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// Show `.back-to-top` past the threshold; clicking it returns to the top.
///
/// # Errors
///
/// Fails when the lookup throws or a listener cannot be attached.
#[cfg(feature = "browser")]
pub fn wire_back_to_top(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::dom::DomError> {
    use crate::dom;

    let Some(button) = document.query_selector(BACK_TO_TOP_SELECTOR)? else {
        return Ok(());
    };
    let threshold = config.back_to_top_threshold;

    {
        let win = window.clone();
        let button = button.clone();
        dom::listen(window, "scroll", move |_| {
            let visible = back_to_top_visible(dom::scroll_top(&win), threshold);
            dom::set_class(&button, VISIBLE_CLASS, visible);
        })?;
    }

    let win = window.clone();
    dom::listen(&button, "click", move |_| dom::smooth_scroll_to(&win, 0.0))
}

/// Add `visible` to each `.animate-on-scroll` element the first time it
/// enters the viewport.
///
/// # Errors
///
/// Fails when the observer cannot be created.
#[cfg(feature = "browser")]
pub fn wire_reveal(
    document: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::dom::DomError> {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::dom;

    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    dom::set_class(&entry.target(), VISIBLE_CLASS, true);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    options.set_root_margin(&config.reveal.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

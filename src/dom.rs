//! Browser glue shared by the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every behavior module keeps its decisions in plain functions and calls the
//! helpers here for the web-sys plumbing: element lookup, listener
//! registration, style writes and scrolling.
//!
//! ERROR HANDLING
//! ==============
//! Wiring failures surface as [`DomError`] so the start hook can log them per
//! feature. Failures inside event handlers are logged where they happen.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "browser")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "browser")]
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

/// Error raised while wiring page behaviors.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to encode event payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "browser")]
impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// # Errors
///
/// [`DomError::NoWindow`] outside a browser main thread.
#[cfg(feature = "browser")]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// # Errors
///
/// [`DomError::NoDocument`] when the window has no document.
#[cfg(feature = "browser")]
pub fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

/// # Errors
///
/// [`DomError::NoBody`] when the document has no `<body>` yet.
#[cfg(feature = "browser")]
pub fn body(document: &Document) -> Result<HtmlElement, DomError> {
    document.body().ok_or(DomError::NoBody)
}

/// First element matching `selector` that is an `HtmlElement`.
///
/// # Errors
///
/// [`DomError::Js`] when `selector` is not a valid CSS selector.
#[cfg(feature = "browser")]
pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, DomError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Every element matching `selector`, in document order.
///
/// # Errors
///
/// [`DomError::Js`] when `selector` is not a valid CSS selector.
#[cfg(feature = "browser")]
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Like [`query_all`], scoped to descendants of `root`.
///
/// # Errors
///
/// [`DomError::Js`] when `selector` is not a valid CSS selector.
#[cfg(feature = "browser")]
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

#[cfg(feature = "browser")]
fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register `handler` for `kind` on `target` for the lifetime of the page.
///
/// # Errors
///
/// [`DomError::Js`] when the browser rejects the listener.
#[cfg(feature = "browser")]
pub fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Set an inline style property, logging instead of failing.
#[cfg(feature = "browser")]
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("failed to set {property}: {e:?}");
    }
}

/// Add or remove `class` on `el` depending on `present`.
#[cfg(feature = "browser")]
pub fn set_class(el: &Element, class: &str, present: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, present) {
        log::warn!("failed to toggle class {class}: {e:?}");
    }
}

#[cfg(feature = "browser")]
pub fn scroll_top(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[cfg(feature = "browser")]
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

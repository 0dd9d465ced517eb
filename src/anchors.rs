//! Smooth scrolling for in-page anchor links.
//!
//! Targets land just below the fixed header rather than under it.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Selector to scroll to for an anchor `href`, if any.
///
/// A bare `#` is a placeholder link and scrolls nowhere.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Header height to keep clear, falling back when there is no header.
#[must_use]
pub fn header_offset(header_height: Option<i32>, fallback: f64) -> f64 {
    header_height.map_or(fallback, f64::from)
}

/// Document offset to scroll to so the target sits below the header.
#[must_use]
pub fn scroll_destination(target_viewport_top: f64, page_offset: f64, header_height: f64) -> f64 {
    target_viewport_top + page_offset - header_height
}

/// Attach click handlers to every in-page anchor.
///
/// # Errors
///
/// Fails when the anchor query throws or a listener cannot be attached.
#[cfg(feature = "browser")]
pub fn wire(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::dom::DomError> {
    use crate::dom;

    let header = dom::query_html(document, crate::nav::HEADER_SELECTOR)?;
    let fallback = config.fallback_header_height;

    for anchor in dom::query_all(document, ANCHOR_SELECTOR)? {
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let target = match document.query_selector(selector) {
                Ok(Some(target)) => target,
                Ok(None) => return,
                Err(e) => {
                    log::debug!("anchor {selector} is not a valid selector: {e:?}");
                    return;
                }
            };
            let height = header_offset(header.as_ref().map(web_sys::HtmlElement::offset_height), fallback);
            let top = scroll_destination(
                target.get_bounding_client_rect().top(),
                dom::scroll_top(&window),
                height,
            );
            dom::smooth_scroll_to(&window, top);
        })?;
    }
    Ok(())
}

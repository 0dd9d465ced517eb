//! Small decorative effects: skill tag hover lift and deferred image loading.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

pub const SKILL_TAG_SELECTOR: &str = ".skill-tags span";
pub const DEFERRED_IMAGE_SELECTOR: &str = "img[data-src]";

#[must_use]
pub fn hover_transform(hovering: bool) -> &'static str {
    if hovering {
        "translateY(-3px) scale(1.05)"
    } else {
        "translateY(0) scale(1)"
    }
}

/// Lift skill tags while hovered.
///
/// # Errors
///
/// Fails when the lookup throws or a listener cannot be attached.
#[cfg(feature = "browser")]
pub fn wire_skill_tags(document: &web_sys::Document) -> Result<(), crate::dom::DomError> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::dom;

    for tag in dom::query_all(document, SKILL_TAG_SELECTOR)? {
        let Ok(tag) = tag.dyn_into::<HtmlElement>() else {
            continue;
        };
        for (kind, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let el = tag.clone();
            dom::listen(&tag, kind, move |_| dom::set_style(&el, "transform", hover_transform(hovering)))?;
        }
    }
    Ok(())
}

/// Copy `data-src` into `src` for deferred images after a short delay.
#[cfg(feature = "browser")]
pub fn schedule_preload(document: &web_sys::Document, config: &crate::config::PageConfig) {
    let document = document.clone();
    gloo_timers::callback::Timeout::new(config.image_preload_delay_ms, move || {
        let images = match crate::dom::query_all(&document, DEFERRED_IMAGE_SELECTOR) {
            Ok(images) => images,
            Err(e) => {
                log::warn!("image preload skipped: {e}");
                return;
            }
        };
        for img in images {
            let Some(src) = img.get_attribute("data-src") else {
                continue;
            };
            if let Err(e) = img.set_attribute("src", &src) {
                log::warn!("failed to preload {src}: {e:?}");
            }
        }
    })
    .forget();
}

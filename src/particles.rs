//! Optional particle background.
//!
//! Runs only when the page loaded the `particles.js` library and provides a
//! `#particles-js` container.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use serde_json::{Value, json};

pub const CONTAINER_ID: &str = "particles-js";
pub const LIBRARY_GLOBAL: &str = "particlesJS";

/// Settings passed to `particlesJS`.
#[must_use]
pub fn particles_config() -> Value {
    json!({
        "particles": {
            "number": { "value": 100, "density": { "enable": true, "value_area": 800 } },
            "color": { "value": "#ffffff" },
            "shape": { "type": "circle" },
            "opacity": { "value": 0.5, "random": true },
            "size": { "value": 3, "random": true },
            "line_linked": {
                "enable": true,
                "distance": 150,
                "color": "#ffffff",
                "opacity": 0.2,
                "width": 1
            },
            "move": {
                "enable": true,
                "speed": 2,
                "direction": "none",
                "random": true,
                "straight": false,
                "out_mode": "out"
            }
        },
        "interactivity": {
            "detect_on": "canvas",
            "events": {
                "onhover": { "enable": true, "mode": "repulse" },
                "onclick": { "enable": true, "mode": "push" }
            }
        },
        "retina_detect": true
    })
}

/// Start the particle background if the library and container are present.
///
/// # Errors
///
/// Fails when the library call throws.
#[cfg(feature = "browser")]
pub fn init(document: &web_sys::Document, config: &crate::config::PageConfig) -> Result<(), crate::dom::DomError> {
    use wasm_bindgen::{JsCast, JsValue};

    if !config.particles_enabled || document.get_element_by_id(CONTAINER_ID).is_none() {
        return Ok(());
    }
    let library = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(LIBRARY_GLOBAL))?;
    let Some(start) = library.dyn_ref::<js_sys::Function>() else {
        log::debug!("{LIBRARY_GLOBAL} not loaded, skipping particle background");
        return Ok(());
    };
    let settings = js_sys::JSON::parse(&particles_config().to_string())?;
    start.call2(&JsValue::NULL, &JsValue::from_str(CONTAINER_ID), &settings)?;
    Ok(())
}

//! Browser side of the theme controller.
//!
//! Persists the preference in `localStorage`, mirrors the effective theme onto
//! the `dark-theme` class of `<body>` and the `#themeToggle` control, listens
//! to `(prefers-color-scheme: dark)`, and re-announces changes as a
//! `themechange` `CustomEvent` on the document for page scripts that are not
//! written in Rust.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

#[cfg(feature = "browser")]
use std::cell::RefCell;
#[cfg(feature = "browser")]
use std::rc::Rc;

#[cfg(feature = "browser")]
use theme::{Broadcast, PreferenceStore, Theme, ThemeChanged, ThemeController, ThemeSurface, ToggleVisual};
#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;
#[cfg(feature = "browser")]
use web_sys::{Document, Element, Event, HtmlElement, MediaQueryList, MediaQueryListEvent, Window};

#[cfg(feature = "browser")]
use crate::config::PageConfig;
#[cfg(feature = "browser")]
use crate::dom::{self, DomError};

pub const DARK_CLASS: &str = "dark-theme";
pub const TOGGLE_ID: &str = "themeToggle";
pub const CHANGE_EVENT: &str = "themechange";
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const PRESSED_TRANSFORM: &str = "scale(0.9)";
pub const RELEASED_TRANSFORM: &str = "scale(1)";

/// Controller type mounted on the page.
#[cfg(feature = "browser")]
pub type PageThemeController = ThemeController<LocalStore, PageSurface>;

/// `localStorage` entry holding the explicit preference.
#[cfg(feature = "browser")]
pub struct LocalStore {
    key: String,
}

#[cfg(feature = "browser")]
impl LocalStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, theme: Theme) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, theme preference not saved");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, theme.as_str()) {
            log::warn!("failed to save theme preference: {e:?}");
        }
    }
}

/// Document flag plus the optional toggle control.
#[cfg(feature = "browser")]
pub struct PageSurface {
    body: HtmlElement,
    toggle: Option<HtmlElement>,
    icon: Option<Element>,
    press_ms: u32,
}

#[cfg(feature = "browser")]
impl ThemeSurface for PageSurface {
    fn apply(&self, theme: Theme) {
        dom::set_class(&self.body, DARK_CLASS, theme.is_dark());

        let (Some(toggle), Some(icon)) = (&self.toggle, &self.icon) else {
            return;
        };
        let visual = ToggleVisual::for_theme(theme);
        icon.set_class_name(visual.icon_class);
        if let Err(e) = toggle.set_attribute("aria-label", visual.aria_label) {
            log::warn!("failed to set toggle label: {e:?}");
        }
    }

    fn play_press(&self) {
        let Some(toggle) = self.toggle.clone() else {
            return;
        };
        dom::set_style(&toggle, "transform", PRESSED_TRANSFORM);
        gloo_timers::callback::Timeout::new(self.press_ms, move || {
            dom::set_style(&toggle, "transform", RELEASED_TRANSFORM);
        })
        .forget();
    }
}

/// Re-dispatch a change as `CustomEvent("themechange", { detail: { theme } })`.
#[cfg(feature = "browser")]
fn dispatch_change(document: &Document, event: &ThemeChanged) -> Result<(), DomError> {
    let detail = js_sys::JSON::parse(&event.to_json()?)?;
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    let custom = web_sys::CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init)?;
    document.dispatch_event(&custom)?;
    Ok(())
}

/// Initialize the theme controller and attach its two event sources.
///
/// The returned handle is shared with the click and media-query listeners.
///
/// # Errors
///
/// Fails when the document has no body or the browser rejects a listener.
#[cfg(feature = "browser")]
pub fn mount(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<Rc<RefCell<PageThemeController>>, DomError> {
    let body = dom::body(document)?;
    let toggle = document
        .get_element_by_id(TOGGLE_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let icon = match &toggle {
        Some(toggle) => toggle.query_selector("i")?,
        None => None,
    };
    let media = window.match_media(DARK_QUERY)?;
    let prefers_dark = media.as_ref().is_some_and(MediaQueryList::matches);

    let mut broadcast = Broadcast::new();
    let doc = document.clone();
    broadcast.subscribe(move |event: &ThemeChanged| {
        if let Err(e) = dispatch_change(&doc, event) {
            log::warn!("failed to dispatch {CHANGE_EVENT}: {e}");
        }
    });

    let surface = PageSurface {
        body,
        toggle: toggle.clone(),
        icon,
        press_ms: config.toggle_press_ms,
    };
    let controller = ThemeController::initialize(
        LocalStore::new(config.theme_storage_key.clone()),
        surface,
        broadcast,
        prefers_dark,
    );
    log::info!("theme: {}", controller.theme());
    let controller = Rc::new(RefCell::new(controller));

    if let Some(toggle) = &toggle {
        let controller = Rc::clone(&controller);
        dom::listen(toggle, "click", move |_| match controller.try_borrow_mut() {
            Ok(mut c) => {
                c.toggle();
            }
            Err(_) => log::warn!("theme toggle ignored: controller busy"),
        })?;
    }

    if let Some(media) = &media {
        let controller = Rc::clone(&controller);
        dom::listen(media, "change", move |event: Event| {
            let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut c) => {
                    c.on_system_preference_changed(event.matches());
                }
                Err(_) => log::warn!("system theme change ignored: controller busy"),
            }
        })?;
    }

    Ok(controller)
}

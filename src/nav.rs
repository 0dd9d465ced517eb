//! Navbar scroll effect.
//!
//! The `.glass-nav` header gains `scrolled` once the page is scrolled past a
//! threshold, slides out of view while scrolling down deep into the page, and
//! slides back on any upward scroll.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::NavbarConfig;

pub const HEADER_SELECTOR: &str = ".glass-nav";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const HIDDEN_TRANSFORM: &str = "translateY(-100%)";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// What the navbar should look like after one scroll event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarFrame {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarFrame {
    #[must_use]
    pub fn transform(self) -> &'static str {
        if self.hidden { HIDDEN_TRANSFORM } else { SHOWN_TRANSFORM }
    }
}

/// Remembers the previous offset to tell scroll direction.
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarTracker {
    last_top: f64,
    scrolled_threshold: f64,
    hide_threshold: f64,
}

impl NavbarTracker {
    #[must_use]
    pub fn new(config: &NavbarConfig) -> Self {
        Self {
            last_top: 0.0,
            scrolled_threshold: config.scrolled_threshold,
            hide_threshold: config.hide_threshold,
        }
    }

    pub fn on_scroll(&mut self, top: f64) -> NavbarFrame {
        let frame = NavbarFrame {
            scrolled: top > self.scrolled_threshold,
            hidden: top > self.last_top && top > self.hide_threshold,
        };
        self.last_top = top;
        frame
    }
}

/// Attach the scroll listener. No-op when the page has no navbar.
///
/// # Errors
///
/// Fails when the header lookup throws or the listener cannot be attached.
#[cfg(feature = "browser")]
pub fn wire(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::dom::DomError> {
    use crate::dom;

    let Some(header) = dom::query_html(document, HEADER_SELECTOR)? else {
        return Ok(());
    };
    let mut tracker = NavbarTracker::new(&config.navbar);
    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        let frame = tracker.on_scroll(dom::scroll_top(&win));
        dom::set_class(&header, SCROLLED_CLASS, frame.scrolled);
        dom::set_style(&header, "transform", frame.transform());
    })
}

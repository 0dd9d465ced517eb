//! Toast notifications.
//!
//! One toast is visible at a time: showing a new one removes the old. Toasts
//! slide in from the right, close on demand, and dismiss themselves after a
//! configurable lifetime.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

pub const NOTIFICATION_SELECTOR: &str = ".notification";
pub const CLOSE_LABEL: &str = "Close notification";
pub const STYLE_ELEMENT_ID: &str = "notification-styles";
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

pub const KEYFRAMES: &str = "
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon name, without the `fa-` prefix.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
            Self::Warning => "exclamation-triangle",
        }
    }

    /// Warnings share the info color.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info | Self::Warning => "#3b82f6",
        }
    }

    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    #[must_use]
    pub fn icon_class(self) -> String {
        format!("fas fa-{}", self.icon())
    }
}

/// Inline style for a toast of `kind`.
#[must_use]
pub fn toast_style(kind: NotificationKind) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; display: flex; align-items: center; \
         gap: 0.75rem; z-index: 10000; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2); \
         animation: slideInRight 0.3s ease; max-width: 400px; font-size: 0.95rem;",
        kind.background()
    )
}

/// Shows toasts on one document.
#[cfg(feature = "browser")]
#[derive(Clone)]
pub struct Notifier {
    document: web_sys::Document,
    lifetime_ms: u32,
    exit_ms: u32,
}

#[cfg(feature = "browser")]
impl Notifier {
    #[must_use]
    pub fn new(document: web_sys::Document, config: &crate::config::PageConfig) -> Self {
        Self {
            document,
            lifetime_ms: config.notification_lifetime_ms,
            exit_ms: config.notification_exit_ms,
        }
    }

    /// Replace any visible toast with `message`.
    ///
    /// # Errors
    ///
    /// Fails when the toast elements cannot be created or attached.
    pub fn show(&self, message: &str, kind: NotificationKind) -> Result<(), crate::dom::DomError> {
        use gloo_timers::callback::Timeout;

        use crate::dom;

        for existing in dom::query_all(&self.document, NOTIFICATION_SELECTOR)? {
            existing.remove();
        }

        let toast = self.document.create_element("div")?;
        toast.set_class_name(&kind.class_name());
        toast.set_attribute("style", &toast_style(kind))?;

        let icon = self.document.create_element("i")?;
        icon.set_class_name(&kind.icon_class());
        let text = self.document.create_element("span")?;
        text.set_text_content(Some(message));
        let close = self.document.create_element("button")?;
        close.set_class_name("notification-close");
        close.set_attribute("aria-label", CLOSE_LABEL)?;
        close.set_text_content(Some("\u{00d7}"));

        toast.append_child(&icon)?;
        toast.append_child(&text)?;
        toast.append_child(&close)?;
        dom::body(&self.document)?.append_child(&toast)?;
        self.ensure_keyframes()?;

        let exit_ms = self.exit_ms;
        {
            let toast = toast.clone();
            dom::listen(&close, "click", move |_| dismiss(&toast, exit_ms))?;
        }
        Timeout::new(self.lifetime_ms, move || {
            if toast.parent_node().is_some() {
                dismiss(&toast, exit_ms);
            }
        })
        .forget();
        Ok(())
    }

    fn ensure_keyframes(&self) -> Result<(), crate::dom::DomError> {
        if self.document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
            return Ok(());
        }
        let Some(head) = self.document.head() else {
            return Ok(());
        };
        let style = self.document.create_element("style")?;
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(KEYFRAMES));
        head.append_child(&style)?;
        Ok(())
    }
}

/// Play the exit animation, then detach.
#[cfg(feature = "browser")]
fn dismiss(toast: &web_sys::Element, exit_ms: u32) {
    use wasm_bindgen::JsCast;

    if let Some(el) = toast.dyn_ref::<web_sys::HtmlElement>() {
        crate::dom::set_style(el, "animation", EXIT_ANIMATION);
    }
    let toast = toast.clone();
    gloo_timers::callback::Timeout::new(exit_ms, move || toast.remove()).forget();
}

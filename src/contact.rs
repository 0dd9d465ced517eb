//! Contact form submission stub.
//!
//! There is no backend: delivery encodes the message as it would be posted,
//! waits to simulate the round trip, and reports success. The form shows a
//! sending state for the duration and always recovers its submit button.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::notify::NotificationKind;

pub const FORM_SELECTOR: &str = ".contact-form";
pub const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;
pub const SENDING_MARKUP: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to encode contact message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Fields collected from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Build from a field lookup; missing fields become empty strings.
    pub fn from_fields(mut field: impl FnMut(&str) -> Option<String>) -> Self {
        let mut get = |name: &str| field(name).unwrap_or_default().trim().to_owned();
        Self {
            name: get("name"),
            email: get("email"),
            subject: get("subject"),
            message: get("message"),
        }
    }

    /// Request body a real endpoint would receive.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Encode`] if serialization fails.
    pub fn encode(&self) -> Result<String, DeliveryError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Notification to show once delivery settles.
#[must_use]
pub fn outcome_notice(result: &Result<(), DeliveryError>) -> (&'static str, NotificationKind) {
    match result {
        Ok(()) => (SUCCESS_MESSAGE, NotificationKind::Success),
        Err(_) => (FAILURE_MESSAGE, NotificationKind::Error),
    }
}

/// Simulated delivery: encode, wait `delay_ms`, succeed.
///
/// # Errors
///
/// Returns [`DeliveryError`] when the message cannot be encoded.
#[cfg(feature = "browser")]
pub async fn deliver(message: &ContactMessage, delay_ms: u32) -> Result<(), DeliveryError> {
    let body = message.encode()?;
    log::debug!("simulating contact delivery: {body}");
    gloo_timers::future::TimeoutFuture::new(delay_ms).await;
    Ok(())
}

/// Attach the submit handler. No-op when the page has no contact form.
///
/// # Errors
///
/// Fails when the form lookup throws or the listener cannot be attached.
#[cfg(feature = "browser")]
pub fn wire(
    document: &web_sys::Document,
    config: &crate::config::PageConfig,
    notifier: crate::notify::Notifier,
) -> Result<(), crate::dom::DomError> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlButtonElement, HtmlFormElement};

    use crate::dom;

    let Some(form) = document
        .query_selector(FORM_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let delay_ms = config.form_delay_ms;

    let handle = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let form = handle.clone();
        let notifier = notifier.clone();
        let button = form
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let message = collect(&form);
        let original = button.as_ref().map(|b| {
            let markup = b.inner_html();
            b.set_inner_html(SENDING_MARKUP);
            b.set_disabled(true);
            markup
        });

        wasm_bindgen_futures::spawn_local(async move {
            let result = deliver(&message, delay_ms).await;
            let (text, kind) = outcome_notice(&result);
            if let Err(e) = notifier.show(text, kind) {
                log::warn!("failed to show notification: {e}");
            }
            match &result {
                Ok(()) => form.reset(),
                Err(e) => log::error!("contact form submission failed: {e}"),
            }

            if let (Some(button), Some(markup)) = (button, original) {
                button.set_inner_html(&markup);
                button.set_disabled(false);
            }
        });
    })
}

#[cfg(feature = "browser")]
fn collect(form: &web_sys::HtmlFormElement) -> ContactMessage {
    match web_sys::FormData::new_with_form(form) {
        Ok(data) => ContactMessage::from_fields(|name| data.get(name).as_string()),
        Err(e) => {
            log::warn!("failed to read contact form fields: {e:?}");
            ContactMessage::default()
        }
    }
}

use super::*;
use std::collections::HashMap;

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================
// ContactMessage
// =============================================================

#[test]
fn from_fields_reads_named_inputs() {
    let form = fields(&[
        ("name", "Ada"),
        ("email", "ada@example.com"),
        ("subject", "Hello"),
        ("message", "Nice portfolio"),
    ]);
    let message = ContactMessage::from_fields(|name| form.get(name).cloned());
    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "ada@example.com");
    assert_eq!(message.subject, "Hello");
    assert_eq!(message.message, "Nice portfolio");
}

#[test]
fn from_fields_trims_and_defaults_missing() {
    let form = fields(&[("name", "  Ada  ")]);
    let message = ContactMessage::from_fields(|name| form.get(name).cloned());
    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "");
    assert_eq!(message.subject, "");
}

#[test]
fn encode_produces_json_body() {
    let message = ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Hi".to_owned(),
    };
    let body: serde_json::Value = serde_json::from_str(&message.encode().expect("encode")).expect("json");
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["message"], "Hi");
    assert_eq!(body["subject"], "");
}

// =============================================================
// Outcome
// =============================================================

#[test]
fn success_outcome_shows_success_notice() {
    let (text, kind) = outcome_notice(&Ok(()));
    assert_eq!(text, SUCCESS_MESSAGE);
    assert_eq!(kind, NotificationKind::Success);
}

#[test]
fn failure_outcome_shows_error_notice() {
    let err = serde_json::from_str::<u8>("x").expect_err("invalid");
    let (text, kind) = outcome_notice(&Err(DeliveryError::from(err)));
    assert_eq!(text, FAILURE_MESSAGE);
    assert_eq!(kind, NotificationKind::Error);
}

#[test]
fn sending_markup_shows_spinner() {
    assert!(SENDING_MARKUP.contains("fa-spinner fa-spin"));
    assert!(SENDING_MARKUP.ends_with("Sending..."));
}

use super::*;

#[test]
fn dom_error_messages_name_the_missing_piece() {
    assert_eq!(DomError::NoWindow.to_string(), "no global window");
    assert_eq!(DomError::NoDocument.to_string(), "window has no document");
    assert_eq!(DomError::NoBody.to_string(), "document has no body");
}

#[test]
fn js_error_message_is_preserved() {
    let err = DomError::Js("SyntaxError: bad selector".to_owned());
    assert_eq!(err.to_string(), "javascript error: SyntaxError: bad selector");
}

#[test]
fn payload_error_converts_from_serde() {
    let serde_err = serde_json::from_str::<u32>("not json").expect_err("invalid json");
    let err = DomError::from(serde_err);
    assert!(matches!(err, DomError::Payload(_)));
    assert!(err.to_string().starts_with("failed to encode event payload"));
}

use super::*;

#[test]
fn hovered_tag_lifts_and_grows() {
    assert_eq!(hover_transform(true), "translateY(-3px) scale(1.05)");
}

#[test]
fn released_tag_returns_to_rest() {
    assert_eq!(hover_transform(false), "translateY(0) scale(1)");
}

use super::*;

#[test]
fn back_to_top_hidden_near_top() {
    assert!(!back_to_top_visible(0.0, 300.0));
    assert!(!back_to_top_visible(300.0, 300.0));
}

#[test]
fn back_to_top_visible_past_threshold() {
    assert!(back_to_top_visible(300.5, 300.0));
    assert!(back_to_top_visible(2000.0, 300.0));
}

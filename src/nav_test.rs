use super::*;

fn tracker() -> NavbarTracker {
    NavbarTracker::new(&NavbarConfig::default())
}

// =============================================================
// scrolled class
// =============================================================

#[test]
fn top_of_page_is_not_scrolled() {
    let frame = tracker().on_scroll(0.0);
    assert!(!frame.scrolled);
    assert!(!frame.hidden);
}

#[test]
fn scrolled_applies_strictly_past_threshold() {
    let mut t = tracker();
    assert!(!t.on_scroll(100.0).scrolled);
    assert!(t.on_scroll(101.0).scrolled);
}

#[test]
fn scrolled_clears_when_returning_to_top() {
    let mut t = tracker();
    t.on_scroll(150.0);
    assert!(!t.on_scroll(40.0).scrolled);
}

// =============================================================
// hide on scroll down
// =============================================================

#[test]
fn scrolling_down_past_hide_threshold_hides() {
    let mut t = tracker();
    t.on_scroll(150.0);
    let frame = t.on_scroll(250.0);
    assert!(frame.hidden);
    assert_eq!(frame.transform(), "translateY(-100%)");
}

#[test]
fn scrolling_down_above_hide_threshold_stays_visible() {
    let mut t = tracker();
    t.on_scroll(50.0);
    let frame = t.on_scroll(180.0);
    assert!(!frame.hidden);
    assert!(frame.scrolled);
}

#[test]
fn any_upward_scroll_shows_navbar() {
    let mut t = tracker();
    t.on_scroll(900.0);
    let frame = t.on_scroll(850.0);
    assert!(!frame.hidden);
    assert_eq!(frame.transform(), "translateY(0)");
}

#[test]
fn repeated_offset_is_not_downward() {
    let mut t = tracker();
    t.on_scroll(500.0);
    assert!(!t.on_scroll(500.0).hidden);
}

#[test]
fn custom_thresholds_are_honored() {
    let mut t = NavbarTracker::new(&NavbarConfig {
        scrolled_threshold: 10.0,
        hide_threshold: 20.0,
    });
    let frame = t.on_scroll(30.0);
    assert!(frame.scrolled);
    assert!(frame.hidden);
}

use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn complement_inverts_each_variant() {
    assert_eq!(Theme::Light.complement(), Theme::Dark);
    assert_eq!(Theme::Dark.complement(), Theme::Light);
}

#[test]
fn complement_twice_is_identity() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.complement().complement(), theme);
    }
}

#[test]
fn names_match_persisted_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn from_str_accepts_known_names() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn from_str_rejects_other_spellings() {
    let err = "Dark".parse::<Theme>().expect_err("case sensitive");
    assert_eq!(err, ThemeParseError("Dark".to_owned()));
    assert!(err.to_string().contains("Dark"));
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Theme::Dark).expect("serialize");
    assert_eq!(json, "\"dark\"");
    let back: Theme = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(back, Theme::Light);
}

// =============================================================
// Derivation rule
// =============================================================

#[test]
fn resolve_covers_every_stored_and_system_combination() {
    let cases = [
        (None, false, Theme::Light),
        (None, true, Theme::Dark),
        (Some(Theme::Light), false, Theme::Light),
        (Some(Theme::Light), true, Theme::Light),
        (Some(Theme::Dark), false, Theme::Dark),
        (Some(Theme::Dark), true, Theme::Dark),
    ];
    for (stored, prefers_dark, expected) in cases {
        assert_eq!(
            Theme::resolve(stored, prefers_dark),
            expected,
            "stored={stored:?} prefers_dark={prefers_dark}"
        );
    }
}

#[test]
fn from_system_maps_signal() {
    assert_eq!(Theme::from_system(true), Theme::Dark);
    assert_eq!(Theme::from_system(false), Theme::Light);
}

// =============================================================
// Stored preference parsing
// =============================================================

#[test]
fn stored_preference_missing_is_unset() {
    assert_eq!(stored_preference(None), None);
}

#[test]
fn stored_preference_empty_is_unset() {
    assert_eq!(stored_preference(Some("")), None);
}

#[test]
fn stored_preference_reads_known_values() {
    assert_eq!(stored_preference(Some("dark")), Some(Theme::Dark));
    assert_eq!(stored_preference(Some("light")), Some(Theme::Light));
}

#[test]
fn stored_preference_unknown_value_is_explicit_light() {
    assert_eq!(stored_preference(Some("sepia")), Some(Theme::Light));
}

#[test]
fn explicit_preference_agrees_with_stored_preference() {
    for raw in [None, Some(""), Some("dark"), Some("light"), Some("sepia")] {
        assert_eq!(is_explicit_preference(raw), stored_preference(raw).is_some(), "raw={raw:?}");
    }
}

// =============================================================
// ToggleVisual
// =============================================================

#[test]
fn dark_theme_offers_switch_to_light() {
    let visual = ToggleVisual::for_theme(Theme::Dark);
    assert_eq!(visual.icon_class, "fas fa-sun");
    assert_eq!(visual.aria_label, "Switch to light theme");
}

#[test]
fn light_theme_offers_switch_to_dark() {
    let visual = ToggleVisual::for_theme(Theme::Light);
    assert_eq!(visual.icon_class, "fas fa-moon");
    assert_eq!(visual.aria_label, "Switch to dark theme");
}

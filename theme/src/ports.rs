//! Traits the controller drives.
//!
//! The browser implementations live in the page crate; tests use in-memory
//! fakes. Both traits take `&self` because browser handles mutate through
//! shared references.

use crate::model::Theme;

/// Durable storage for the explicit theme preference.
pub trait PreferenceStore {
    /// Raw stored value, or `None` when the key is absent.
    fn load(&self) -> Option<String>;

    /// Persist `theme` as the explicit preference.
    fn save(&self, theme: Theme);
}

/// Visual state mirrored from the effective theme.
pub trait ThemeSurface {
    /// Set the document flag and the toggle control's icon and label.
    ///
    /// Must leave both consistent with `theme` before returning.
    fn apply(&self, theme: Theme);

    /// Start the press affordance on the toggle control.
    ///
    /// Fire and forget: implementations schedule the release and return
    /// immediately.
    fn play_press(&self);
}

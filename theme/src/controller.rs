//! Theme controller: the single owner of the effective theme.
//!
//! DESIGN
//! ======
//! Construction is initialization, so the entry point runs exactly once.
//! After that, state only changes through [`ThemeController::toggle`] (user
//! driven, persists, broadcasts) and
//! [`ThemeController::on_system_preference_changed`] (ambient, gated on the
//! absence of a stored preference, never persists, never broadcasts).

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::broadcast::{Broadcast, SubscriptionId, ThemeChanged};
use crate::model::{Theme, is_explicit_preference, stored_preference};
use crate::ports::{PreferenceStore, ThemeSurface};

pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    broadcast: Broadcast,
    effective: Theme,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Resolve the initial theme, apply it, and announce it.
    ///
    /// Subscribers already registered on `broadcast` receive the initial
    /// announcement. Storage is read but never written.
    pub fn initialize(store: S, surface: V, broadcast: Broadcast, prefers_dark: bool) -> Self {
        let stored = stored_preference(store.load().as_deref());
        let effective = Theme::resolve(stored, prefers_dark);
        log::debug!("theme initialized: {effective} (stored={stored:?}, prefers_dark={prefers_dark})");

        surface.apply(effective);
        let controller = Self {
            store,
            surface,
            broadcast,
            effective,
        };
        controller.announce();
        controller
    }

    /// Invert the effective theme and make it the explicit preference.
    pub fn toggle(&mut self) -> Theme {
        let next = self.effective.complement();
        self.effective = next;
        self.store.save(next);
        self.surface.apply(next);
        self.surface.play_press();
        log::debug!("theme toggled to {next}");
        self.announce();
        next
    }

    /// Follow the system signal when the user has not chosen a theme.
    ///
    /// Returns the new effective theme, or `None` when a stored preference
    /// takes precedence and nothing changed.
    pub fn on_system_preference_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_stored_preference() {
            log::debug!("system theme change ignored: stored preference wins");
            return None;
        }
        let next = Theme::from_system(prefers_dark);
        self.effective = next;
        self.surface.apply(next);
        log::debug!("theme follows system: {next}");
        Some(next)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.effective
    }

    #[must_use]
    pub fn has_stored_preference(&self) -> bool {
        is_explicit_preference(self.store.load().as_deref())
    }

    /// Register a subscriber for later announcements.
    pub fn subscribe(&mut self, callback: impl Fn(&ThemeChanged) + 'static) -> SubscriptionId {
        self.broadcast.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.broadcast.unsubscribe(id)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &V {
        &self.surface
    }

    fn announce(&self) {
        self.broadcast.emit(&ThemeChanged {
            theme: self.effective,
        });
    }
}

impl<S, V> std::fmt::Debug for ThemeController<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("effective", &self.effective)
            .field("broadcast", &self.broadcast)
            .finish_non_exhaustive()
    }
}

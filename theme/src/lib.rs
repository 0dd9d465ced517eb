//! Light/dark theme state for the portfolio page.
//!
//! This crate is browser agnostic. It owns the effective theme, the rule that
//! derives it from the stored preference and the system signal, and the
//! broadcast that announces changes. The page crate supplies browser-backed
//! implementations of the [`ports`] traits and forwards DOM events into the
//! [`controller::ThemeController`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | [`Theme`] value, stored-value parsing, toggle visuals |
//! | [`ports`] | Storage and surface traits the controller drives |
//! | [`broadcast`] | Subscriber registry for [`ThemeChanged`] announcements |
//! | [`controller`] | The controller and its three entry points |

pub mod broadcast;
pub mod controller;
pub mod model;
pub mod ports;

pub use broadcast::{Broadcast, SubscriptionId, ThemeChanged};
pub use controller::ThemeController;
pub use model::{Theme, ThemeParseError, ToggleVisual};
pub use ports::{PreferenceStore, ThemeSurface};

//! Theme values and the derivation rule for the effective theme.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

/// Display mode applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted and broadcast name: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Theme implied by the system "prefers dark" signal alone.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Effective theme: the stored preference if set, else the system signal.
    #[must_use]
    pub fn resolve(stored: Option<Self>, prefers_dark: bool) -> Self {
        stored.unwrap_or_else(|| Self::from_system(prefers_dark))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Interpret a raw value read from persisted storage.
///
/// Missing and empty values mean no explicit preference. `"dark"` is dark;
/// any other value is still an explicit choice and resolves to light.
#[must_use]
pub fn stored_preference(raw: Option<&str>) -> Option<Theme> {
    let raw = raw.filter(|v| !v.is_empty())?;
    match raw.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            log::warn!("stored theme not recognized, using light: {e}");
            Some(Theme::Light)
        }
    }
}

/// Whether a raw stored value counts as an explicit preference.
///
/// Same rule as [`stored_preference`] without parsing or logging, for checks
/// that run on every system theme change.
#[must_use]
pub fn is_explicit_preference(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| !v.is_empty())
}

/// Icon and accessible label shown on the toggle control.
///
/// Both describe the theme the control would switch *to*.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleVisual {
    pub icon_class: &'static str,
    pub aria_label: &'static str,
}

impl ToggleVisual {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                icon_class: "fas fa-sun",
                aria_label: "Switch to light theme",
            },
            Theme::Light => Self {
                icon_class: "fas fa-moon",
                aria_label: "Switch to dark theme",
            },
        }
    }
}

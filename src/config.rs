//! Page configuration.
//!
//! Defaults reproduce the page's stock behavior. A page may override any
//! subset of fields with a JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">{"navbar": {"hide_threshold": 400}}</script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Storage key holding the explicit theme preference.
    pub theme_storage_key: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    pub navbar: NavbarConfig,
    pub back_to_top_threshold: f64,
    /// Header height used for anchor offsets when `.glass-nav` is absent.
    pub fallback_header_height: f64,
    pub toggle_press_ms: u32,
    pub form_delay_ms: u32,
    pub notification_lifetime_ms: u32,
    pub notification_exit_ms: u32,
    pub image_preload_delay_ms: u32,
    pub reveal: RevealConfig,
    pub particles_enabled: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            log_level: "info".to_owned(),
            navbar: NavbarConfig::default(),
            back_to_top_threshold: 300.0,
            fallback_header_height: 80.0,
            toggle_press_ms: 150,
            form_delay_ms: 2000,
            notification_lifetime_ms: 5000,
            notification_exit_ms: 300,
            image_preload_delay_ms: 100,
            reveal: RevealConfig::default(),
            particles_enabled: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Offset past which the navbar gets the `scrolled` class.
    pub scrolled_threshold: f64,
    /// Offset past which scrolling down hides the navbar.
    pub hide_threshold: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            hide_threshold: 200.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an override block; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configured log level, `info` when unrecognized.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Read the override block from the document, if there is one.
///
/// # Errors
///
/// Returns [`ConfigError`] when the block exists but does not parse.
#[cfg(feature = "browser")]
pub fn read(document: &web_sys::Document) -> Result<PageConfig, ConfigError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());
    match raw {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

//! # folio
//!
//! WASM page script for a static portfolio site: light/dark theme switching,
//! navbar scroll styling, the mobile menu, smooth anchor scrolling, a contact
//! form stub with toast notifications, a back-to-top control, reveal-on-scroll
//! animations, and the optional particle background.
//!
//! Theme state lives in the browser-agnostic `theme` crate. The modules here
//! keep their decisions in plain functions and put the web-sys wiring behind
//! the `browser` feature, so host builds compile and test everything except
//! the DOM calls themselves.

pub mod anchors;
pub mod app;
pub mod config;
pub mod contact;
pub mod dom;
pub mod effects;
pub mod menu;
pub mod nav;
pub mod notify;
pub mod particles;
pub mod scroll;
pub mod theme_dom;

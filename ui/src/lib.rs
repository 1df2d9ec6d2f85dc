//! Shared UI crate for the Data Academy site. Content loading, session state
//! and every page component live here; the platform shells only route, style
//! and pick a data source.

use dioxus::prelude::*;

pub mod archive;
pub mod components;
pub mod content;
pub mod core;
pub mod home;
pub mod i18n;
pub mod meta;
pub mod session;
pub mod views;

/// Site stylesheet, shared by the shells.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

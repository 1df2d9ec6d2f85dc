//! Platform-agnostic building blocks shared by both pages.

pub mod clipboard;
pub mod format;
pub mod icon;
pub mod lang;
pub mod platform;

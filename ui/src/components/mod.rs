//! Building blocks shared by both pages.

// Page headers and cross-page links (components/site_header.rs)
pub mod site_header;
pub use site_header::{page_link, register_nav, LanguageToggle, NavBuilder, PageLink, SiteHeader};

mod media;
pub use media::{placeholder_image, FallbackImage, IconBadge, NamedIcon};

mod loading;
pub use loading::LoadingScreen;

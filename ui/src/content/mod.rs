//! Site content: document models, localization and loading.

mod error;
pub use error::LoadError;

mod localized;
pub use localized::{LocalizedText, Translations};

pub mod model;

pub mod source;
pub use source::{DataSource, HttpSource, MemorySource, Resource, ResourceSource};
#[cfg(not(target_arch = "wasm32"))]
pub use source::DirSource;

mod loader;
pub use loader::{
    fetch_document, ArchiveContent, HomeContent, LoadReport, Loaded, PageContent, ResourceFailure,
};

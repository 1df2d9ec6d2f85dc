#![cfg(test)]
//! The desktop webview resolves absolute paths against `assets/` (the
//! resource directory picked in `main.rs`). Images the pages reference and the
//! bundled content documents must be present there.

use std::path::{Path, PathBuf};

use ui::content::Resource;

fn resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[test]
fn referenced_images_are_bundled() {
    for href in ui::meta::STATIC_FILES {
        let path = resource_dir().join(href.trim_start_matches('/'));
        assert!(path.is_file(), "`{href}` is referenced but {path:?} is missing");
    }
}

#[test]
fn bundled_documents_cover_every_resource() {
    for resource in Resource::ALL {
        let path = resource_dir().join("data").join(resource.file_name());
        assert!(path.is_file(), "{resource} missing at {path:?}");
    }
}

#![cfg(test)]
//! The web build serves `public/` at the site root. Pages and the document head
//! reference these files by absolute path, so a missing one only shows up as a
//! broken image or favicon in the browser.

use std::path::{Path, PathBuf};

use ui::content::Resource;

fn public_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

fn served(href: &str) -> PathBuf {
    public_root().join(href.trim_start_matches('/'))
}

#[test]
fn referenced_images_are_served() {
    for href in ui::meta::STATIC_FILES {
        let path = served(href);
        assert!(path.is_file(), "`{href}` is referenced but {path:?} is missing");
    }
}

#[test]
fn favicon_is_a_png() {
    let bytes = std::fs::read(served(ui::meta::FAVICON_HREF)).expect("favicon readable");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "favicon is not a PNG");
}

#[test]
fn every_content_document_is_published() {
    for resource in Resource::ALL {
        let path = public_root().join("data").join(resource.file_name());
        assert!(path.is_file(), "{resource} missing at {path:?}");
    }
}

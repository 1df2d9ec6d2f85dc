#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors the shared page components render with remain
  present in the site theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (sections, cards, the course modal, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".section {",
    ".grid--3",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--ghost",
    ".badge {",
    ".icon {",
    // Header & hero
    ".navbar {",
    ".navbar__links",
    ".hero {",
    ".hero__actions",
    // Cards
    ".card {",
    ".card__facts",
    ".course-grid",
    ".archive-card__outcomes",
    // Landing sections
    ".stats__value",
    ".partner {",
    ".team-card__portrait",
    ".contact-card__status",
    ".contact__cta",
    ".footer {",
    // Archive page
    ".page-header",
    ".empty-state",
    // Course modal & loading
    ".modal {",
    ".modal__card",
    ".loading__spinner",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn modal_block_consistency() {
    let has_header = THEME_CSS.contains(".modal__header");
    let has_facts = THEME_CSS.contains(".modal__facts");
    assert!(
        has_header && has_facts,
        "Course modal sub‑selectors missing (header: {has_header}, facts: {has_facts})"
    );
}

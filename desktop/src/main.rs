#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder};
#[cfg(feature = "desktop")]
use ui::content::{DataSource, DirSource, HttpSource};
use ui::views::{ArchivedCourses, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/archived-courses")]
    ArchivedCourses {},
}

/// Overrides the bundled documents with an HTTP base, e.g. `https://academy.example/data/`.
#[cfg(feature = "desktop")]
const DATA_URL_VAR: &str = "ACADEMY_DATA_URL";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css).

#[cfg(feature = "desktop")]
fn main() {
    init_logger();
    let resource_dir = resolve_resource_dir();
    let source = data_source(&resource_dir);
    tracing::info!(?source, "desktop content source");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Data Academy – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(source)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logger();
    LaunchBuilder::server().launch(App);
}

fn init_logger() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logger: {err}");
    }
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "button button--outline", to: Route::Home {}, "{label}" })
}
fn nav_archive(label: &str) -> Element {
    rsx!(Link { class: "button button--outline", to: Route::ArchivedCourses {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        home: nav_home,
        archive: nav_archive,
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

/// `ACADEMY_DATA_URL` when set and valid, else the bundled `data/` directory.
#[cfg(feature = "desktop")]
fn data_source(resource_dir: &std::path::Path) -> DataSource {
    if let Ok(base) = std::env::var(DATA_URL_VAR) {
        match HttpSource::parse(&base) {
            Ok(source) => return DataSource::Http(source),
            Err(err) => {
                tracing::warn!(var = DATA_URL_VAR, %base, %err, "ignoring invalid data URL")
            }
        }
    }
    DataSource::Dir(DirSource::new(resource_dir.join("data")))
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

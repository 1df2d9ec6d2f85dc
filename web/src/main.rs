use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder};
use ui::content::DataSource;
use ui::views::{ArchivedCourses, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/archived-courses")]
    ArchivedCourses {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "button button--outline",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_archive(label: &str) -> Element {
    rsx!(Link {
        class: "button button--outline",
        to: Route::ArchivedCourses {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            archive: nav_archive,
        });
    }

    // Documents are served next to the page under `/data/`.
    use_context_provider(|| {
        let source = DataSource::platform_default();
        tracing::info!(?source, "web content source");
        source
    });

    rsx! {
        ui::meta::SiteMeta {}
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

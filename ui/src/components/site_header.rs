use crate::content::Translations;
use crate::core::{icon::Icon, lang::Lang};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use super::IconBadge;

/// Logo served from the site's public folder.
pub const LOGO_SRC: &str = "/pics/icon.png";

/// Pages a shared component can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Home,
    Archive,
}

impl PageLink {
    fn plain_href(self) -> &'static str {
        match self {
            PageLink::Home => "/",
            PageLink::Archive => "/archived-courses",
        }
    }
}

/// Platform-supplied link builders.
///
/// `ui` does not know the platform `Route` enums, so each shell registers one
/// closure per page. Each returns a `Link` (or anything styled like one) whose
/// child is exactly the label passed in:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "button button--outline", to: Route::Home {}, "{label}" } ),
///     archive: |label| rsx!( Link { class: "button button--outline", to: Route::Archive {}, "{label}" } ),
/// });
/// ```
/// Without a registration, plain anchors to the canonical paths are rendered.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub archive: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation builder already registered");
    }
}

/// Link to another page of the site.
pub fn page_link(target: PageLink, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => {
            let build = match target {
                PageLink::Home => builder.home,
                PageLink::Archive => builder.archive,
            };
            build(label)
        }
        None => rsx! {
            a { class: "button button--outline", href: target.plain_href(), "{label}" }
        },
    }
}

/// Button flipping between the two site languages. Shows the language it switches to.
#[component]
pub fn LanguageToggle(lang: Lang, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button button--ghost lang-toggle",
            title: t!(lang, "language-toggle-label"),
            onclick: move |_| on_toggle.call(()),
            IconBadge { icon: Icon::Globe, class: "icon--sm" }
            span { class: "lang-toggle__label", {t!(lang, "language-toggle")} }
        }
    }
}

/// In-page anchors of the landing page, keyed into `translations.json`.
const SECTION_ANCHORS: &[(&str, &str)] = &[
    ("#home", "home"),
    ("#services", "services"),
    ("#courses", "courses"),
    ("#partners", "partners"),
    ("#about", "about"),
    ("#contact", "contact"),
];

/// Fixed header of the landing page.
#[component]
pub fn SiteHeader(lang: Lang, translations: Translations, on_toggle: EventHandler<()>) -> Element {
    let title = translations.text(lang, "heroTitle");

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__logo",
                        img { src: LOGO_SRC, alt: t!(lang, "logo-alt") }
                    }
                    span { class: "navbar__brand-mark", "{title}" }
                }

                nav { class: "navbar__links",
                    for (href, key) in SECTION_ANCHORS.iter() {
                        a { key: "{href}", class: "navbar__link", href: *href,
                            "{translations.text(lang, key)}"
                        }
                    }
                }

                LanguageToggle { lang, on_toggle }
            }
        }
    }
}

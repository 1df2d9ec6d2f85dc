//! Chrome of the archived-courses page.

mod card;
pub use card::ArchiveCard;

use dioxus::prelude::*;

use crate::components::{page_link, IconBadge, LanguageToggle, PageLink};
use crate::core::{icon::Icon, lang::Lang};
use crate::t;

#[component]
pub fn ArchiveHeader(lang: Lang, on_toggle: EventHandler<()>) -> Element {
    let back = page_link(PageLink::Home, &t!(lang, "archive-back-home"));

    rsx! {
        header { class: "page-header",
            div { class: "page-header__bar",
                {back}
                LanguageToggle { lang, on_toggle }
            }
            div { class: "page-header__titles",
                h1 { {t!(lang, "archive-title")} }
                p { {t!(lang, "archive-subtitle")} }
            }
        }
    }
}

#[component]
pub fn EmptyArchive(lang: Lang) -> Element {
    rsx! {
        div { class: "empty-state",
            IconBadge { icon: Icon::BookOpen, class: "icon--xl" }
            h3 { {t!(lang, "archive-empty-title")} }
            p { {t!(lang, "archive-empty-hint")} }
        }
    }
}

#[component]
pub fn ArchiveFooter(lang: Lang) -> Element {
    rsx! {
        footer { class: "footer footer--compact",
            p { class: "footer__rights", {t!(lang, "archive-footer")} }
        }
    }
}

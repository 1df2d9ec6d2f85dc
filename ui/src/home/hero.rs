use dioxus::prelude::*;

use crate::components::{site_header::LOGO_SRC, IconBadge};
use crate::content::Translations;
use crate::core::{icon::Icon, lang::Lang, platform::Outbound};
use crate::meta::COVER_SRC;
use crate::t;

#[component]
pub fn Hero(lang: Lang, translations: Translations, registration_link: String) -> Element {
    let title = translations.text(lang, "heroTitle");
    let subtitle = translations.text(lang, "heroSubtitle");
    let description = translations.text(lang, "heroDescription");
    let register = translations.text(lang, "registerTraining");
    let contact = translations.text(lang, "contactMentoring");
    let cover = format!("background-image: url('{COVER_SRC}');");

    rsx! {
        section { id: "home", class: "hero", style: cover,
            div { class: "hero__overlay" }
            div { class: "hero__content",
                div { class: "hero__logo",
                    img { src: LOGO_SRC, alt: t!(lang, "logo-alt") }
                }
                h1 { class: "hero__title", "{title}" }
                p { class: "hero__subtitle", "{subtitle}" }
                p { class: "hero__description", "{description}" }

                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary button--lg",
                        onclick: move |_| Outbound::NewTab(registration_link.clone()).open(),
                        IconBadge { icon: Icon::BookOpen, class: "icon--sm" }
                        "{register}"
                    }
                    a { class: "button button--glass button--lg", href: "#contact",
                        IconBadge { icon: Icon::Mail, class: "icon--sm" }
                        "{contact}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::site_header::LOGO_SRC;
use crate::content::Translations;
use crate::core::lang::Lang;
use crate::t;

#[component]
pub fn SiteFooter(lang: Lang, translations: Translations, email: String) -> Element {
    let brand = translations.text(lang, "heroTitle");
    let description = translations.text(lang, "footerDescription");
    let rights = translations.text(lang, "footerText");

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    img { class: "footer__logo", src: LOGO_SRC, alt: t!(lang, "logo-alt") }
                    span { "{brand}" }
                }
                p { class: "footer__description", "{description}" }
                a { class: "footer__email", href: "mailto:{email}", dir: "ltr", "{email}" }
                p { class: "footer__rights", "{rights}" }
            }
        }
    }
}

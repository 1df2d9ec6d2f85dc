use dioxus::prelude::*;

use crate::components::FallbackImage;
use crate::content::{model::Partner, Translations};
use crate::core::{lang::Lang, platform::Outbound};

const PARTNER_LOGO_FALLBACK: &str = "https://img.icons8.com/color/96/000000/company.png";

#[component]
pub fn PartnersSection(lang: Lang, translations: Translations, partners: Vec<Partner>) -> Element {
    let title = translations.text(lang, "partnersTitle");
    let subtitle = translations.text(lang, "partnersSubtitle");

    rsx! {
        section { id: "partners", class: "section",
            div { class: "section__header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            div { class: "partners",
                for partner in partners.iter().filter(|p| p.active) {
                    {render_partner(lang, partner)}
                }
            }
        }
    }
}

fn render_partner(lang: Lang, partner: &Partner) -> Element {
    let name = partner.title.resolve(lang);
    let target = Outbound::NewTab(partner.embed_url.clone());

    rsx! {
        button {
            key: "{partner.id}",
            r#type: "button",
            class: "partner",
            onclick: move |_| target.open(),
            div { class: "partner__logo",
                FallbackImage {
                    src: partner.icon.clone(),
                    fallback: PARTNER_LOGO_FALLBACK.to_string(),
                    alt: name,
                }
            }
            h3 { class: "partner__name", "{name}" }
        }
    }
}

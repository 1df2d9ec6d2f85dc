use dioxus::prelude::*;

use crate::components::{FallbackImage, IconBadge};
use crate::content::{model::TeamMember, Translations};
use crate::core::{icon::Icon, lang::Lang, platform::Outbound};
use crate::meta::PORTRAIT_PLACEHOLDER;

#[component]
pub fn TeamSection(lang: Lang, translations: Translations, team: Vec<TeamMember>) -> Element {
    let title = translations.text(lang, "aboutTitle");
    let subtitle = translations.text(lang, "aboutSubtitle");
    let linkedin_label = translations.text(lang, "viewLinkedIn").to_string();

    rsx! {
        section { id: "about", class: "section section--muted",
            div { class: "section__header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            div { class: "grid grid--3",
                for (index, member) in team.iter().enumerate() {
                    {render_member(lang, index, member, &linkedin_label)}
                }
            }
        }
    }
}

fn render_member(lang: Lang, index: usize, member: &TeamMember, linkedin_label: &str) -> Element {
    let profile = Outbound::NewTab(member.linkedin.clone());

    rsx! {
        article { key: "{index}", class: "card card--center team-card",
            div { class: "team-card__portrait",
                FallbackImage {
                    src: member.image.clone(),
                    fallback: PORTRAIT_PLACEHOLDER.to_string(),
                    alt: member.name.clone(),
                }
            }
            h3 { class: "card__title", "{member.name}" }
            p { class: "team-card__role", "{member.title.resolve(lang)}" }
            p { class: "card__text", "{member.bio.resolve(lang)}" }
            button {
                r#type: "button",
                class: "button button--outline",
                onclick: move |_| profile.open(),
                "{linkedin_label}"
                IconBadge { icon: Icon::ChevronRight, class: "icon--sm" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::NamedIcon;
use crate::content::{model::Service, Translations};
use crate::core::lang::Lang;

/// Palettes cycled by card position.
const BG_PALETTE: [&str; 4] = ["bg-primary", "bg-accent", "bg-chart-2", "bg-chart-3"];
const TEXT_PALETTE: [&str; 4] = ["text-primary", "text-accent", "text-chart-2", "text-chart-3"];

/// Features listed per card.
const FEATURE_PREVIEW: usize = 3;

pub(crate) fn palette(index: usize) -> (&'static str, &'static str) {
    (
        BG_PALETTE[index % BG_PALETTE.len()],
        TEXT_PALETTE[index % TEXT_PALETTE.len()],
    )
}

#[component]
pub fn ServicesSection(lang: Lang, translations: Translations, services: Vec<Service>) -> Element {
    let title = translations.text(lang, "servicesTitle");
    let subtitle = translations.text(lang, "servicesSubtitle");

    rsx! {
        section { id: "services", class: "section section--muted",
            div { class: "section__header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            div { class: "grid grid--4",
                for (index, service) in services.iter().enumerate() {
                    {render_service(lang, index, service)}
                }
            }
        }
    }
}

fn render_service(lang: Lang, index: usize, service: &Service) -> Element {
    let (bg, text) = palette(index);
    let title = service.title.resolve(lang);
    let description = service.description.resolve(lang);
    let duration = service.duration.resolve(lang);
    let features: Vec<String> = service
        .features
        .iter()
        .take(FEATURE_PREVIEW)
        .map(|feature| feature.resolve(lang).to_string())
        .collect();

    rsx! {
        article { key: "{service.id}", class: "card card--center card--lift",
            div { class: "card__icon card__icon--round {bg}",
                NamedIcon { name: service.icon.clone(), class: "icon--lg {text}" }
            }
            h3 { class: "card__title", "{title}" }
            p { class: "card__text", "{description}" }
            ul { class: "card__features",
                for feature in features.iter() {
                    li { "• {feature}" }
                }
            }
            div { class: "card__meta text-primary", "{duration}" }
        }
    }
}

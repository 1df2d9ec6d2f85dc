use dioxus::prelude::*;

use crate::components::NamedIcon;
use crate::content::{
    model::{ImpactData, ImpactMetric},
    Translations,
};
use crate::core::{format, lang::Lang};

/// `1,200` or `95%`.
pub(crate) fn metric_value(metric: &ImpactMetric) -> String {
    let value = format::format_number(metric.value);
    if metric.is_percentage {
        format!("{value}%")
    } else {
        value
    }
}

#[component]
pub fn StatsSection(lang: Lang, translations: Translations, impact: ImpactData) -> Element {
    let title = translations.text(lang, "statsTitle");

    rsx! {
        section { id: "stats-section", class: "section section--primary stats",
            div { class: "section__header",
                h2 { "{title}" }
            }

            div { class: "grid grid--4 stats__metrics",
                for metric in impact.metrics.iter() {
                    div { key: "{metric.id}", class: "stats__metric",
                        div { class: "stats__icon",
                            NamedIcon { name: metric.icon.clone(), class: "icon--inverse" }
                        }
                        div { class: "stats__value", "{metric_value(metric)}" }
                        div { class: "stats__label", "{metric.label.resolve(lang)}" }
                        p { class: "stats__description", "{metric.description.resolve(lang)}" }
                    }
                }
            }

            if !impact.highlights.is_empty() {
                div { class: "grid grid--3 stats__highlights",
                    for highlight in impact.highlights.iter() {
                        div { key: "{highlight.id}", class: "stats__highlight",
                            NamedIcon { name: highlight.icon.clone(), class: "icon--inverse icon--sm" }
                            h3 { "{highlight.title.resolve(lang)}" }
                            p { "{highlight.description.resolve(lang)}" }
                        }
                    }
                }
            }
        }
    }
}

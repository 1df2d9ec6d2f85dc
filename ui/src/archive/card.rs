use dioxus::prelude::*;

use crate::components::IconBadge;
use crate::content::model::ArchivedCourse;
use crate::core::{
    format::{self, DateStyle},
    icon::Icon,
    lang::Lang,
};
use crate::t;

/// Outcomes listed per card.
const OUTCOME_PREVIEW: usize = 2;

#[component]
pub fn ArchiveCard(lang: Lang, course: ArchivedCourse) -> Element {
    let completed = format::format_date(&course.completed_date, lang, DateStyle::Long);
    let facts = [
        (Icon::Calendar, t!(lang, "archive-completed"), completed),
        (Icon::Users, t!(lang, "archive-participants"), course.participants.to_string()),
        (Icon::Clock, t!(lang, "archive-duration"), course.duration.resolve(lang).to_string()),
        (Icon::Star, t!(lang, "archive-rating"), course.rating.to_string()),
    ];

    rsx! {
        article { class: "card card--lift archive-card",
            div { class: "card__header",
                div { class: "card__icon-row",
                    div { class: "card__icon card__icon--sm",
                        IconBadge { icon: course.icon() }
                    }
                    span { class: "badge", "{course.level.resolve(lang)}" }
                }
                h3 { class: "card__title", "{course.title.resolve(lang)}" }
                p { class: "card__text", "{course.description.resolve(lang)}" }
            }

            dl { class: "card__facts",
                for (icon, label, value) in facts {
                    div { key: "{label}", class: "card__fact",
                        dt {
                            IconBadge { icon, class: "icon--sm" }
                            "{label}"
                        }
                        dd { "{value}" }
                    }
                }
            }

            if !course.outcomes.is_empty() {
                div { class: "archive-card__outcomes",
                    h4 { {t!(lang, "archive-outcomes")} }
                    ul {
                        for (index, outcome) in course.outcomes.iter().take(OUTCOME_PREVIEW).enumerate() {
                            li { key: "{index}", "{outcome.resolve(lang)}" }
                        }
                    }
                }
            }

            if !course.instructor.is_empty() {
                p { class: "archive-card__instructor",
                    strong { {t!(lang, "archive-instructor")} }
                    " {course.instructor}"
                }
            }
        }
    }
}

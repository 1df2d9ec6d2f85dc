use dioxus::prelude::*;

use crate::components::{page_link, placeholder_image, FallbackImage, IconBadge, PageLink};
use crate::content::{model::ArchivedCourse, Translations};
use crate::core::{
    format::{self, DateStyle},
    icon::Icon,
    lang::Lang,
};

/// Archived courses teased on the landing page.
pub(crate) const PREVIEW_COUNT: usize = 3;

#[component]
pub fn ArchivePreview(lang: Lang, translations: Translations, courses: Vec<ArchivedCourse>) -> Element {
    let tr = |key: &str| translations.text(lang, key).to_string();
    let title = tr("archivedCoursesTitle");
    let subtitle = tr("archivedCoursesSubtitle");
    let labels = PreviewLabels {
        completed: tr("completedOn"),
        participants: tr("participantsCount"),
        rating: tr("rating"),
    };
    let view_all = page_link(PageLink::Archive, &tr("viewAllArchived"));

    rsx! {
        section { id: "archived", class: "section section--muted",
            div { class: "section__header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            div { class: "grid grid--3",
                for course in courses.iter().take(PREVIEW_COUNT) {
                    {render_preview(lang, &labels, course)}
                }
            }

            div { class: "section__footer", {view_all} }
        }
    }
}

struct PreviewLabels {
    completed: String,
    participants: String,
    rating: String,
}

fn render_preview(lang: Lang, labels: &PreviewLabels, course: &ArchivedCourse) -> Element {
    let title = course.title.resolve(lang);
    let description = course.description.resolve(lang);
    let level = course.level.resolve(lang);
    let completed = format::format_date(&course.completed_date, lang, DateStyle::Short);
    let fallback = placeholder_image("400x240", "10B981", &course.title.en);

    rsx! {
        article { key: "{course.id}", class: "card card--lift archive-card",
            if let Some(image) = course.image.as_ref() {
                div { class: "archive-card__media",
                    FallbackImage { src: image.clone(), fallback, alt: title, class: "archive-card__image" }
                    span { class: "badge badge--floating", "{level}" }
                    span { class: "badge badge--rating", "★ {course.rating}" }
                }
            }

            div { class: "card__header",
                div { class: "card__icon-row",
                    div { class: "card__icon card__icon--sm",
                        IconBadge { icon: course.icon(), class: "icon--sm" }
                    }
                    if course.image.is_none() {
                        span { class: "badge", "{level}" }
                    }
                }
                h3 { class: "card__title", "{title}" }
                p { class: "card__text card__text--clamp", "{description}" }
            }

            dl { class: "card__facts card__facts--compact",
                div { class: "card__fact",
                    dt { "{labels.completed}:" }
                    dd { "{completed}" }
                }
                div { class: "card__fact",
                    dt { "{labels.participants}:" }
                    dd { "{course.participants}" }
                }
                div { class: "card__fact",
                    dt { "{labels.rating}:" }
                    dd { "{course.rating}"
                        IconBadge { icon: Icon::Star, class: "icon--star" }
                    }
                }
            }
        }
    }
}

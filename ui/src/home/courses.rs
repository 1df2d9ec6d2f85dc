use dioxus::prelude::*;

use crate::components::{placeholder_image, FallbackImage, IconBadge};
use crate::content::{
    model::{active_courses, Course},
    Translations,
};
use crate::core::{format, lang::Lang};

/// `250,000 IQD` style price label.
pub(crate) fn price_label(course: &Course, currency: &str) -> String {
    let amount = format::format_number(course.price);
    if currency.is_empty() {
        amount
    } else {
        format!("{amount} {currency}")
    }
}

#[component]
pub fn CoursesSection(
    lang: Lang,
    translations: Translations,
    courses: Vec<Course>,
    on_select: EventHandler<Course>,
) -> Element {
    let title = translations.text(lang, "coursesTitle");
    let subtitle = translations.text(lang, "coursesSubtitle");
    let labels = CourseLabels::new(&translations, lang);

    rsx! {
        section { id: "courses", class: "section",
            div { class: "section__header",
                h2 { "{title}" }
                p { "{subtitle}" }
            }

            div { class: "course-grid",
                for course in active_courses(&courses) {
                    {render_course(lang, &labels, course, on_select)}
                }
            }
        }
    }
}

/// Dictionary labels shared by course cards and the detail modal.
#[derive(Clone, PartialEq)]
pub(crate) struct CourseLabels {
    pub price: String,
    pub duration: String,
    pub currency: String,
    pub register: String,
    pub learn_more: String,
}

impl CourseLabels {
    pub fn new(translations: &Translations, lang: Lang) -> Self {
        let tr = |key: &str| translations.text(lang, key).to_string();
        Self {
            price: tr("price"),
            duration: tr("duration"),
            currency: tr("iqd"),
            register: tr("registerNow"),
            learn_more: tr("learnMore"),
        }
    }
}

fn render_course(
    lang: Lang,
    labels: &CourseLabels,
    course: &Course,
    on_select: EventHandler<Course>,
) -> Element {
    let title = course.title.resolve(lang);
    let description = course.description.resolve(lang);
    let level = course.level.resolve(lang);
    let duration = course.duration.resolve(lang);
    let price = price_label(course, &labels.currency);
    let fallback = placeholder_image("400x300", "3B82F6", &course.title.en);
    let registration = course.registration();
    let selected = course.clone();

    rsx! {
        article { key: "{course.id}", class: "card card--lift course-card",
            if let Some(image) = course.image.as_ref() {
                div { class: "course-card__media",
                    FallbackImage { src: image.clone(), fallback, alt: title, class: "course-card__image" }
                    span { class: "badge badge--floating", "{level}" }
                }
            }

            div { class: "card__header",
                div { class: "card__icon-row",
                    div { class: "card__icon",
                        IconBadge { icon: course.icon() }
                    }
                    if course.image.is_none() {
                        span { class: "badge", "{level}" }
                    }
                }
                h3 { class: "card__title", "{title}" }
                p { class: "card__text", "{description}" }
            }

            dl { class: "card__facts",
                div { class: "card__fact",
                    dt { "{labels.price}:" }
                    dd { class: "card__fact-value--strong", "{price}" }
                }
                div { class: "card__fact",
                    dt { "{labels.duration}:" }
                    dd { "{duration}" }
                }
            }

            div { class: "card__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| registration.open(),
                    "{labels.register}"
                }
                button {
                    r#type: "button",
                    class: "button button--outline",
                    onclick: move |_| on_select.call(selected.clone()),
                    "{labels.learn_more}"
                }
            }
        }
    }
}

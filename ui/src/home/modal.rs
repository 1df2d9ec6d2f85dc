use dioxus::prelude::*;

use super::courses::{price_label, CourseLabels};
use crate::components::IconBadge;
use crate::content::{model::Course, Translations};
use crate::core::{icon::Icon, lang::Lang};
use crate::t;

/// Detail overlay for the selected course.
#[component]
pub fn CourseModal(
    lang: Lang,
    translations: Translations,
    course: Course,
    on_close: EventHandler<()>,
    on_register: EventHandler<()>,
) -> Element {
    let labels = CourseLabels::new(&translations, lang);
    let title = course.title.resolve(lang);
    let level = course.level.resolve(lang);
    let description = course.description.resolve(lang);
    let duration = course.duration.resolve(lang);
    let price = price_label(&course, &labels.currency);
    let registration = course.registration();

    rsx! {
        div { class: "modal", role: "dialog", aria_modal: "true",
            onclick: move |_| on_close.call(()),
            div { class: "modal__card card",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal__header",
                    div {
                        h3 { class: "modal__title", "{title}" }
                        span { class: "badge", "{level}" }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost modal__close",
                        aria_label: t!(lang, "modal-close"),
                        onclick: move |_| on_close.call(()),
                        IconBadge { icon: Icon::Close }
                    }
                }

                p { class: "modal__description", "{description}" }

                dl { class: "modal__facts",
                    div {
                        dt { "{labels.price}:" }
                        dd { class: "modal__price", "{price}" }
                    }
                    div {
                        dt { "{labels.duration}:" }
                        dd { "{duration}" }
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: move |_| {
                        registration.open();
                        on_register.call(());
                    },
                    "{labels.register}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::use_page;
use crate::components::{LoadingScreen, SiteHeader};
use crate::content::HomeContent;
use crate::home::{
    ArchivePreview, ContactSection, CourseModal, CoursesSection, Hero, PartnersSection,
    ServicesSection, SiteFooter, StatsSection, TeamSection,
};
use crate::session::PageEvent;

#[component]
pub fn Home() -> Element {
    let page = use_page::<HomeContent>();
    let state = page.read();
    let lang = state.lang;

    if !state.is_ready() {
        return rsx! { LoadingScreen { lang } };
    }

    let content = state.content;
    let translations = content.translations;
    let registration_link = content.config.registration_link().to_string();
    let contact_email = content.config.contact_email().to_string();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = lang.code(), courses = content.courses.len(), "home render");

    rsx! {
        div { class: "page page-home", dir: lang.dir(), lang: lang.code(),
            SiteHeader {
                lang,
                translations: translations.clone(),
                on_toggle: move |_| page.dispatch(PageEvent::ToggleLanguage),
            }

            main {
                Hero { lang, translations: translations.clone(), registration_link }
                ServicesSection { lang, translations: translations.clone(), services: content.services }
                CoursesSection {
                    lang,
                    translations: translations.clone(),
                    courses: content.courses,
                    on_select: move |course| page.dispatch(PageEvent::SelectCourse(course)),
                }
                ArchivePreview { lang, translations: translations.clone(), courses: content.archived_courses }
                StatsSection { lang, translations: translations.clone(), impact: content.impact }
                PartnersSection { lang, translations: translations.clone(), partners: content.partners }
                TeamSection { lang, translations: translations.clone(), team: content.team }
                ContactSection {
                    lang,
                    translations: translations.clone(),
                    contact: content.contact,
                    fallback_email: contact_email.clone(),
                }
            }

            SiteFooter { lang, translations: translations.clone(), email: contact_email }

            if let Some(course) = state.selected {
                CourseModal {
                    lang,
                    translations,
                    course,
                    on_close: move |_| page.dispatch(PageEvent::CloseCourse),
                    on_register: move |_| page.dispatch(PageEvent::Registered),
                }
            }
        }
    }
}

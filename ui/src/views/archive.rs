use dioxus::prelude::*;

use super::use_page;
use crate::archive::{ArchiveCard, ArchiveFooter, ArchiveHeader, EmptyArchive};
use crate::components::LoadingScreen;
use crate::content::ArchiveContent;
use crate::session::PageEvent;

#[component]
pub fn ArchivedCourses() -> Element {
    let page = use_page::<ArchiveContent>();
    let state = page.read();
    let lang = state.lang;

    if !state.is_ready() {
        return rsx! { LoadingScreen { lang } };
    }

    let courses = state.content.archived_courses;

    rsx! {
        div { class: "page page-archive", dir: lang.dir(), lang: lang.code(),
            ArchiveHeader { lang, on_toggle: move |_| page.dispatch(PageEvent::ToggleLanguage) }

            main { class: "section",
                if courses.is_empty() {
                    EmptyArchive { lang }
                } else {
                    div { class: "grid grid--3",
                        for course in courses.iter() {
                            ArchiveCard { key: "{course.id}", lang, course: course.clone() }
                        }
                    }
                }
            }

            ArchiveFooter { lang }
        }
    }
}

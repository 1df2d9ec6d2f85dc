use dioxus::prelude::*;

use crate::core::lang::Lang;
use crate::t;

/// Full-page spinner shown until the document batch settles.
#[component]
pub fn LoadingScreen(lang: Lang) -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "loading__spinner", aria_hidden: "true" }
            p { class: "loading__label", {t!(lang, "loading")} }
        }
    }
}

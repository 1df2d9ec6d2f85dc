use dioxus::prelude::*;

use crate::core::icon::Icon;

/// Icon glyph inside a badge. `class` adds size/color modifiers.
#[component]
pub fn IconBadge(icon: Icon, #[props(default, into)] class: String) -> Element {
    rsx! {
        span {
            class: "icon icon--{icon.slug()} {class}",
            aria_hidden: "true",
            "{icon.glyph()}"
        }
    }
}

/// Icon looked up from a free-text name supplied by a data document.
#[component]
pub fn NamedIcon(name: String, #[props(default, into)] class: String) -> Element {
    rsx! {
        IconBadge { icon: Icon::resolve(&name), class }
    }
}

/// `<img>` that swaps to `fallback` once the primary source fails to load.
#[component]
pub fn FallbackImage(
    src: String,
    fallback: String,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
) -> Element {
    let mut failed = use_signal(|| false);
    let current = if failed() || src.trim().is_empty() {
        fallback.clone()
    } else {
        src.clone()
    };

    rsx! {
        img {
            class: "{class}",
            src: "{current}",
            alt: "{alt}",
            onerror: move |_| {
                if !failed() {
                    tracing::debug!(src = %src, "image failed to load; using fallback");
                    failed.set(true);
                }
            },
        }
    }
}

/// Placeholder image carrying the record's English title.
pub fn placeholder_image(size: &str, color: &str, label: &str) -> String {
    let text: String = url::form_urlencoded::byte_serialize(label.as_bytes()).collect();
    format!("https://via.placeholder.com/{size}/{color}/FFFFFF?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_encodes_the_label() {
        assert_eq!(
            placeholder_image("400x300", "3B82F6", "Data & AI"),
            "https://via.placeholder.com/400x300/3B82F6/FFFFFF?text=Data+%26+AI"
        );
    }
}

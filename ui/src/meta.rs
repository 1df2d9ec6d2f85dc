//! Document head of the site: title, search and sharing metadata, favicon.

use dioxus::prelude::*;

pub const TITLE: &str = "Data Academy - Modern Data Specializations";
pub const DESCRIPTION: &str = "Professional training, mentoring and consultancy in data science, \
data analysis, data engineering, cloud engineering, and DevOps engineering for Iraqi and Middle \
Eastern professionals.";
pub const KEYWORDS: &str = "data science, data analysis, data engineering, cloud engineering, \
devops, iraq, middle east, training, mentoring";
pub const AUTHOR: &str = "Data Academy";
pub const FAVICON_HREF: &str = "/pics/icon.png";
pub const COVER_SRC: &str = "/pics/cover.svg";
pub const PORTRAIT_PLACEHOLDER: &str = "/placeholder.svg";

/// Files referenced by absolute path; each shell serves them from its public root.
pub const STATIC_FILES: [&str; 3] = [FAVICON_HREF, COVER_SRC, PORTRAIT_PLACEHOLDER];

/// Open Graph `property` / `content` pairs.
pub const OPEN_GRAPH: [(&str, &str); 3] = [
    ("og:title", TITLE),
    ("og:description", DESCRIPTION),
    ("og:type", "website"),
];

/// `<head>` entries shared by every page.
#[component]
pub fn SiteMeta() -> Element {
    rsx! {
        document::Title { "{TITLE}" }
        document::Meta { name: "description", content: DESCRIPTION }
        document::Meta { name: "keywords", content: KEYWORDS }
        document::Meta { name: "author", content: AUTHOR }
        for (property, content) in OPEN_GRAPH {
            document::Meta { key: "{property}", property, content }
        }
        document::Link { rel: "icon", href: FAVICON_HREF }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharing_tags_repeat_the_page_metadata() {
        let lookup = |name: &str| OPEN_GRAPH.iter().find(|(p, _)| *p == name).map(|(_, c)| *c);
        assert_eq!(lookup("og:title"), Some(TITLE));
        assert_eq!(lookup("og:description"), Some(DESCRIPTION));
        assert_eq!(lookup("og:type"), Some("website"));
    }

    #[test]
    fn favicon_is_the_site_logo() {
        assert_eq!(FAVICON_HREF, crate::components::site_header::LOGO_SRC);
        assert!(DESCRIPTION.contains("Middle Eastern professionals."));
        assert!(!DESCRIPTION.contains("  "));
    }
}

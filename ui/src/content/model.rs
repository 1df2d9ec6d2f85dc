//! Typed shapes of the JSON documents under `/data/`.
//!
//! Records are read-only: they are parsed once per page activation and never
//! written back. Presentation-only fields (colors, icons) default to empty so
//! older documents still parse; structural fields are required and a document
//! missing them fails to load.

use std::fmt;

use serde::Deserialize;

use super::localized::LocalizedText;
use crate::core::{icon::Icon, platform::Outbound};

pub const DEFAULT_REGISTRATION_LINK: &str = "https://forms.gle/D3GNxmgYPnT8kmSi8";
pub const DEFAULT_CONTACT_EMAIL: &str = "info@iq-data.org";

/// Record identifier; the documents use both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub price: f64,
    pub duration: LocalizedText,
    pub level: LocalizedText,
    #[serde(default)]
    pub active: bool,
    pub registration_link: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Course {
    pub fn icon(&self) -> Icon {
        Icon::resolve(&self.icon)
    }

    pub fn registration(&self) -> Outbound {
        Outbound::NewTab(self.registration_link.clone())
    }
}

/// Only courses flagged active are offered on the landing page.
pub fn active_courses(courses: &[Course]) -> impl Iterator<Item = &Course> {
    courses.iter().filter(|course| course.active)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedCourse {
    pub id: RecordId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub completed_date: String,
    pub participants: u32,
    pub duration: LocalizedText,
    pub level: LocalizedText,
    #[serde(default)]
    pub instructor: String,
    pub rating: f64,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub outcomes: Vec<LocalizedText>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ArchivedCourse {
    pub fn icon(&self) -> Icon {
        Icon::resolve(&self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub title: LocalizedText,
    pub bio: LocalizedText,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: RecordId,
    pub title: LocalizedText,
    /// Logo image URL.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub embed_url: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: RecordId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub features: Vec<LocalizedText>,
    #[serde(default)]
    pub duration: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub hover_color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSuggestion {
    pub id: RecordId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon_color: String,
    #[serde(default)]
    pub suggestion: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub social_media: Vec<SocialMedia>,
    #[serde(default)]
    pub contact_suggestions: Vec<ContactSuggestion>,
}

impl ContactData {
    /// Telegram channel for the call to action: matched by id, else the second channel.
    pub fn telegram(&self) -> Option<&SocialMedia> {
        self.social_media
            .iter()
            .find(|social| social.id.eq_ignore_ascii_case("telegram"))
            .or_else(|| self.social_media.get(1))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetric {
    pub id: RecordId,
    #[serde(default)]
    pub icon: String,
    pub value: f64,
    #[serde(default)]
    pub is_percentage: bool,
    pub label: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactHighlight {
    pub id: RecordId,
    #[serde(default)]
    pub icon: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
}

/// `impact.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactData {
    #[serde(default)]
    pub metrics: Vec<ImpactMetric>,
    #[serde(default)]
    pub highlights: Vec<ImpactHighlight>,
}

/// `config.json`. Every field is optional; accessors apply the site defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub academy: AcademyConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademyConfig {
    #[serde(default)]
    pub default_registration_link: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SiteConfig {
    pub fn registration_link(&self) -> &str {
        non_blank(self.academy.default_registration_link.as_deref())
            .unwrap_or(DEFAULT_REGISTRATION_LINK)
    }

    pub fn contact_email(&self) -> &str {
        non_blank(self.academy.email.as_deref()).unwrap_or(DEFAULT_CONTACT_EMAIL)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u64, active: bool) -> Course {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": { "en": format!("Course {id}"), "ar": format!("دورة {id}") },
            "description": { "en": "d", "ar": "و" },
            "price": 250000,
            "duration": { "en": "8 weeks", "ar": "8 أسابيع" },
            "level": { "en": "Beginner", "ar": "مبتدئ" },
            "active": active,
            "registrationLink": "https://forms.example/register",
            "icon": "Database"
        }))
        .unwrap()
    }

    #[test]
    fn inactive_courses_are_filtered_out() {
        let courses = vec![course(1, true), course(2, false), course(3, true)];
        let ids: Vec<String> = active_courses(&courses).map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn course_without_active_flag_is_inactive() {
        let parsed: Course = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": { "en": "t", "ar": "t" },
            "description": { "en": "d", "ar": "d" },
            "price": 1,
            "duration": { "en": "", "ar": "" },
            "level": { "en": "", "ar": "" },
            "registrationLink": ""
        }))
        .unwrap();
        assert!(!parsed.active);
        assert_eq!(parsed.icon(), Icon::DEFAULT);
    }

    #[test]
    fn record_ids_accept_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "data-science"]"#).unwrap();
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "data-science");
    }

    #[test]
    fn config_defaults_apply_when_fields_are_missing() {
        let empty = SiteConfig::default();
        assert_eq!(empty.registration_link(), DEFAULT_REGISTRATION_LINK);
        assert_eq!(empty.contact_email(), DEFAULT_CONTACT_EMAIL);

        let custom: SiteConfig = serde_json::from_str(
            r#"{"academy":{"email":"hello@academy.test","defaultRegistrationLink":" "}}"#,
        )
        .unwrap();
        assert_eq!(custom.contact_email(), "hello@academy.test");
        assert_eq!(custom.registration_link(), DEFAULT_REGISTRATION_LINK);
    }

    #[test]
    fn academy_name_is_accepted_and_ignored() {
        let config: SiteConfig = serde_json::from_str(
            r#"{"academy":{"name":"Data Academy","email":"info@iq-data.org"}}"#,
        )
        .unwrap();
        assert_eq!(config.contact_email(), "info@iq-data.org");
        assert_eq!(config.registration_link(), DEFAULT_REGISTRATION_LINK);
    }

    #[test]
    fn telegram_is_found_by_id_then_position() {
        let by_id: ContactData = serde_json::from_str(
            r#"{"contactInfo":{"email":"e","phone":"p","website":"w"},
                "socialMedia":[
                  {"id":"instagram","name":"Instagram","url":"https://instagram.com/x"},
                  {"id":"facebook","name":"Facebook","url":"https://facebook.com/x"},
                  {"id":"telegram","name":"Telegram","url":"https://t.me/x"}]}"#,
        )
        .unwrap();
        assert_eq!(by_id.telegram().map(|s| s.url.as_str()), Some("https://t.me/x"));

        let by_position: ContactData = serde_json::from_str(
            r#"{"contactInfo":{"email":"e","phone":"p","website":"w"},
                "socialMedia":[
                  {"id":"a","name":"A","url":"https://a"},
                  {"id":"b","name":"B","url":"https://b"}]}"#,
        )
        .unwrap();
        assert_eq!(by_position.telegram().map(|s| s.url.as_str()), Some("https://b"));
    }

    #[test]
    fn malformed_records_fail_to_parse() {
        let missing_price = serde_json::from_str::<Course>(
            r#"{"id":1,"title":{"en":"t","ar":"t"},"description":{"en":"","ar":""},
                "duration":{"en":"","ar":""},"level":{"en":"","ar":""},"registrationLink":""}"#,
        );
        assert!(missing_price.is_err());
    }
}

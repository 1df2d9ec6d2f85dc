//! Page loading against in-memory and on-disk documents.

use futures::executor::block_on;

use ui::content::model::active_courses;
use ui::content::{
    ArchiveContent, HomeContent, LoadError, MemorySource, PageContent, Resource,
};
use ui::core::lang::Lang;
use ui::session::{LoadPhase, PageEvent, PageState};

fn fixture(resource: Resource) -> &'static str {
    match resource {
        Resource::Translations => include_str!("fixtures/translations.json"),
        Resource::Courses => include_str!("fixtures/courses.json"),
        Resource::Team => include_str!("fixtures/team.json"),
        Resource::Config => include_str!("fixtures/config.json"),
        Resource::ArchivedCourses => include_str!("fixtures/archived-courses.json"),
        Resource::Impact => include_str!("fixtures/impact.json"),
        Resource::Services => include_str!("fixtures/services.json"),
        Resource::Partners => include_str!("fixtures/partners.json"),
        Resource::Contact => include_str!("fixtures/contact.json"),
    }
}

fn all_except(skip: &[Resource]) -> MemorySource {
    Resource::ALL
        .into_iter()
        .filter(|resource| !skip.contains(resource))
        .fold(MemorySource::new(), |source, resource| {
            source.with(resource, fixture(resource))
        })
}

#[test]
fn home_page_loads_every_document() {
    let loaded = block_on(HomeContent::load(&all_except(&[])));
    assert!(loaded.report.is_clean(), "{:?}", loaded.report.failures);
    assert_eq!(loaded.report.loaded.len(), HomeContent::RESOURCES.len());

    let content = loaded.content;
    assert_eq!(content.courses.len(), 3);
    assert_eq!(active_courses(&content.courses).count(), 2);
    assert_eq!(content.team.len(), 2);
    assert_eq!(content.archived_courses.len(), 2);
    assert_eq!(content.impact.metrics.len(), 2);
    assert_eq!(content.services.len(), 2);
    assert_eq!(content.partners.len(), 2);
    assert_eq!(content.config.contact_email(), "info@iq-data.org");
    assert_eq!(content.translations.text(Lang::Ar, "home"), "الرئيسية");

    let contact = content.contact.expect("contact document parsed");
    assert_eq!(
        contact.telegram().map(|social| social.url.as_str()),
        Some("https://t.me/iqdata")
    );
}

#[test]
fn loaded_content_moves_the_page_to_ready_once() {
    let loaded = block_on(HomeContent::load(&all_except(&[])));
    let expected = loaded.content.clone();

    let state = PageState::<HomeContent>::loading().reduce(PageEvent::Loaded(loaded.content));
    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.content, expected);

    let replayed = state.clone().reduce(PageEvent::Loaded(HomeContent::default()));
    assert_eq!(replayed.content, expected);
}

#[test]
fn failing_documents_stay_empty_and_the_rest_load() {
    let loaded = block_on(HomeContent::load(&all_except(&[
        Resource::Courses,
        Resource::Contact,
    ])));

    assert!(!loaded.report.is_clean());
    assert_eq!(loaded.report.failures.len(), 2);
    assert!(loaded.report.failed(Resource::Courses));
    assert!(loaded.report.failed(Resource::Contact));
    assert!(!loaded.report.failed(Resource::Team));

    let content = loaded.content;
    assert!(content.courses.is_empty());
    assert!(content.contact.is_none());
    assert_eq!(content.team.len(), 2);
    assert_eq!(content.archived_courses.len(), 2);
    assert_eq!(content.translations.text(Lang::En, "home"), "Home");

    let state = PageState::<HomeContent>::loading().reduce(PageEvent::Loaded(content));
    assert!(state.is_ready());
}

#[test]
fn malformed_document_is_reported_as_a_parse_failure() {
    let source = all_except(&[]).with(Resource::Courses, r#"[{"id": 1, "title": "#);
    let loaded = block_on(HomeContent::load(&source));

    let failure = loaded
        .report
        .failures
        .iter()
        .find(|failure| failure.resource == Resource::Courses)
        .expect("courses failure recorded");
    assert!(matches!(failure.error, LoadError::Parse { .. }));
    assert_eq!(failure.error.resource(), Some(Resource::Courses));
    assert!(loaded.content.courses.is_empty());
}

#[test]
fn missing_translations_leave_keys_blank() {
    let loaded = block_on(HomeContent::load(&all_except(&[Resource::Translations])));
    assert!(loaded.content.translations.is_empty());
    assert_eq!(loaded.content.translations.text(Lang::En, "heroTitle"), "");
}

#[test]
fn archive_page_fetches_only_its_documents() {
    let loaded = block_on(ArchiveContent::load(&all_except(&[])));
    assert!(loaded.report.is_clean());
    assert_eq!(loaded.report.loaded, ArchiveContent::RESOURCES.to_vec());
    assert_eq!(loaded.content.archived_courses.len(), 2);

    let empty = block_on(ArchiveContent::load(&all_except(&[Resource::ArchivedCourses])));
    assert!(empty.content.archived_courses.is_empty());
    assert!(empty.report.failed(Resource::ArchivedCourses));
}

#[cfg(not(target_arch = "wasm32"))]
mod on_disk {
    use super::*;
    use ui::content::{fetch_document, DirSource, ResourceSource};

    fn fixtures() -> DirSource {
        DirSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
    }

    #[tokio::test]
    async fn directory_source_serves_the_home_page() {
        let loaded = HomeContent::load(&fixtures()).await;
        assert!(loaded.report.is_clean(), "{:?}", loaded.report.failures);
        assert_eq!(loaded.content.partners.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_failure() {
        let source = DirSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/no-such-dir"));
        let err = source.fetch(Resource::Impact).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { resource: Resource::Impact, .. }));

        let parsed: Result<Vec<ui::content::model::Partner>, _> =
            fetch_document(&fixtures(), Resource::Partners).await;
        assert_eq!(parsed.map(|partners| partners.len()).ok(), Some(2));
    }
}

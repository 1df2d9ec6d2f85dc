//! Best-effort batch loading of a page's documents.
//!
//! Every document of a page is requested at once and the batch is joined.
//! Each document then settles on its own: a parsed value lands in the page
//! content, a failure leaves that slot at its empty default and is recorded in
//! the [`LoadReport`]. Nothing is retried.

use std::future::Future;

use serde::de::DeserializeOwned;

use super::error::LoadError;
use super::localized::Translations;
use super::model::{
    ArchivedCourse, ContactData, Course, ImpactData, Partner, Service, SiteConfig, TeamMember,
};
use super::source::{Resource, ResourceSource};

/// Fetch one document and parse it into `T`.
pub async fn fetch_document<T, S>(source: &S, resource: Resource) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    S: ResourceSource + ?Sized,
{
    let bytes = source.fetch(resource).await?;
    serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse { resource, source })
}

#[derive(Debug)]
pub struct ResourceFailure {
    pub resource: Resource,
    pub error: LoadError,
}

/// Per-document outcome of one page load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<Resource>,
    pub failures: Vec<ResourceFailure>,
}

impl LoadReport {
    /// Keep the value on success; record the failure and fall back to `T::default()`.
    pub fn settle<T: Default>(&mut self, resource: Resource, outcome: Result<T, LoadError>) -> T {
        self.settle_optional(resource, outcome).unwrap_or_default()
    }

    pub fn settle_optional<T>(
        &mut self,
        resource: Resource,
        outcome: Result<T, LoadError>,
    ) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.loaded.push(resource);
                Some(value)
            }
            Err(error) => {
                self.failures.push(ResourceFailure { resource, error });
                None
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, resource: Resource) -> bool {
        self.failures.iter().any(|f| f.resource == resource)
    }

    /// Emit the outcome to the log: one error per failed document plus a summary.
    pub fn log(&self, page: &str) {
        for failure in &self.failures {
            tracing::error!(
                page,
                resource = %failure.resource,
                error = %failure.error,
                "content document failed to load"
            );
        }

        if self.is_clean() {
            tracing::info!(page, documents = self.loaded.len(), "page content loaded");
        } else {
            tracing::warn!(
                page,
                loaded = self.loaded.len(),
                failed = self.failures.len(),
                "page content partially loaded"
            );
        }
    }
}

/// Content plus the report describing how it was obtained.
#[derive(Debug)]
pub struct Loaded<C> {
    pub content: C,
    pub report: LoadReport,
}

/// Content model of a page that loads its own documents.
pub trait PageContent: Default + Clone + PartialEq + 'static {
    /// Name used in log records.
    const PAGE: &'static str;
    const RESOURCES: &'static [Resource];

    fn load<S: ResourceSource>(source: &S) -> impl Future<Output = Loaded<Self>>;

    fn translations(&self) -> &Translations;
}

/// Everything the landing page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeContent {
    pub translations: Translations,
    pub courses: Vec<Course>,
    pub team: Vec<TeamMember>,
    pub config: SiteConfig,
    pub archived_courses: Vec<ArchivedCourse>,
    pub impact: ImpactData,
    pub services: Vec<Service>,
    pub partners: Vec<Partner>,
    pub contact: Option<ContactData>,
}

impl PageContent for HomeContent {
    const PAGE: &'static str = "home";
    const RESOURCES: &'static [Resource] = &Resource::ALL;

    async fn load<S: ResourceSource>(source: &S) -> Loaded<Self> {
        let (translations, courses, team, config, archived, impact, services, partners, contact) = futures::join!(
            fetch_document(source, Resource::Translations),
            fetch_document(source, Resource::Courses),
            fetch_document(source, Resource::Team),
            fetch_document(source, Resource::Config),
            fetch_document(source, Resource::ArchivedCourses),
            fetch_document(source, Resource::Impact),
            fetch_document(source, Resource::Services),
            fetch_document(source, Resource::Partners),
            fetch_document(source, Resource::Contact),
        );

        let mut report = LoadReport::default();
        let content = HomeContent {
            translations: report.settle(Resource::Translations, translations),
            courses: report.settle(Resource::Courses, courses),
            team: report.settle(Resource::Team, team),
            config: report.settle(Resource::Config, config),
            archived_courses: report.settle(Resource::ArchivedCourses, archived),
            impact: report.settle(Resource::Impact, impact),
            services: report.settle(Resource::Services, services),
            partners: report.settle(Resource::Partners, partners),
            contact: report.settle_optional(Resource::Contact, contact),
        };

        Loaded { content, report }
    }

    fn translations(&self) -> &Translations {
        &self.translations
    }
}

/// Everything the archived-courses page renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveContent {
    pub translations: Translations,
    pub archived_courses: Vec<ArchivedCourse>,
}

impl PageContent for ArchiveContent {
    const PAGE: &'static str = "archive";
    const RESOURCES: &'static [Resource] = &[Resource::Translations, Resource::ArchivedCourses];

    async fn load<S: ResourceSource>(source: &S) -> Loaded<Self> {
        let (translations, archived) = futures::join!(
            fetch_document(source, Resource::Translations),
            fetch_document(source, Resource::ArchivedCourses),
        );

        let mut report = LoadReport::default();
        let content = ArchiveContent {
            translations: report.settle(Resource::Translations, translations),
            archived_courses: report.settle(Resource::ArchivedCourses, archived),
        };

        Loaded { content, report }
    }

    fn translations(&self) -> &Translations {
        &self.translations
    }
}

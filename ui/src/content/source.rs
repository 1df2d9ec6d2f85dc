//! Where the JSON documents come from.
//!
//! The web shell reads them from the same origin over HTTP, the desktop shell
//! from a directory next to the executable (or an HTTP base if configured),
//! and tests from memory. Page loaders only see [`ResourceSource`].

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use url::Url;

use super::error::LoadError;

/// The static documents the site knows how to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Translations,
    Courses,
    Team,
    Config,
    ArchivedCourses,
    Impact,
    Services,
    Partners,
    Contact,
}

impl Resource {
    pub const ALL: [Resource; 9] = [
        Resource::Translations,
        Resource::Courses,
        Resource::Team,
        Resource::Config,
        Resource::ArchivedCourses,
        Resource::Impact,
        Resource::Services,
        Resource::Partners,
        Resource::Contact,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Translations => "translations.json",
            Resource::Courses => "courses.json",
            Resource::Team => "team.json",
            Resource::Config => "config.json",
            Resource::ArchivedCourses => "archived-courses.json",
            Resource::Impact => "impact.json",
            Resource::Services => "services.json",
            Resource::Partners => "partners.json",
            Resource::Contact => "contact.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/data/{}", self.file_name())
    }
}

/// Raw document fetcher. Implementations do not parse.
pub trait ResourceSource {
    fn fetch(&self, resource: Resource) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

/// Documents served over HTTP below a base directory URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSource {
    base: Url,
}

impl HttpSource {
    /// `base` is the directory holding the documents; a trailing slash is implied.
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base }
    }

    pub fn parse(base: &str) -> Result<Self, LoadError> {
        Ok(Self::new(Url::parse(base)?))
    }

    /// `<page origin>/data/` of the running document.
    #[cfg(target_arch = "wasm32")]
    pub fn same_origin() -> Result<Self, LoadError> {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .ok_or(LoadError::NoOrigin)?;
        Ok(Self::new(Url::parse(&origin)?.join("data/")?))
    }

    pub fn url_for(&self, resource: Resource) -> Result<Url, LoadError> {
        Ok(self.base.join(resource.file_name())?)
    }
}

impl ResourceSource for HttpSource {
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(resource)?;
        tracing::debug!(%url, "fetching document");

        let response = reqwest::get(url)
            .await
            .map_err(|source| LoadError::Request { resource, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;
        Ok(body.to_vec())
    }
}

/// Documents read from a local directory (desktop bundles).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ResourceSource for DirSource {
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, LoadError> {
        let path = self.root.join(resource.file_name());
        tracing::debug!(path = %path.display(), "reading document");
        tokio::fs::read(&path)
            .await
            .map_err(|source| LoadError::Io { resource, source })
    }
}

/// Fixed in-memory documents, for previews and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    documents: HashMap<Resource, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource: Resource, body: impl Into<String>) -> Self {
        self.documents.insert(resource, body.into());
        self
    }
}

impl ResourceSource for MemorySource {
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, LoadError> {
        self.documents
            .get(&resource)
            .map(|body| body.as_bytes().to_vec())
            .ok_or(LoadError::Missing { resource })
    }
}

/// The source a platform shell hands to the pages through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(HttpSource),
    #[cfg(not(target_arch = "wasm32"))]
    Dir(DirSource),
    Memory(MemorySource),
}

impl DataSource {
    /// Same-origin `/data/` on the web, `assets/data` relative to the working directory elsewhere.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match HttpSource::same_origin() {
                Ok(source) => DataSource::Http(source),
                Err(err) => {
                    tracing::error!(%err, "unable to resolve page origin; no content will load");
                    DataSource::Memory(MemorySource::new())
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            DataSource::Dir(DirSource::new("assets/data"))
        }
    }
}

impl ResourceSource for DataSource {
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, LoadError> {
        match self {
            DataSource::Http(source) => source.fetch(resource).await,
            #[cfg(not(target_arch = "wasm32"))]
            DataSource::Dir(source) => source.fetch(resource).await,
            DataSource::Memory(source) => source.fetch(resource).await,
        }
    }
}

use thiserror::Error;

use super::source::Resource;

/// Why a single document could not be turned into content.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{resource}: request failed: {source}")]
    Request {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
    #[error("{resource}: server answered {status}")]
    Status { resource: Resource, status: u16 },
    #[error("{resource}: {source}")]
    Io {
        resource: Resource,
        #[source]
        source: std::io::Error,
    },
    #[error("{resource}: document not available")]
    Missing { resource: Resource },
    #[error("{resource}: malformed document: {source}")]
    Parse {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid data base URL: {0}")]
    InvalidBase(#[from] url::ParseError),
    #[error("page origin unavailable")]
    NoOrigin,
}

impl LoadError {
    /// The document the failure belongs to, when there is one.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            LoadError::Request { resource, .. }
            | LoadError::Status { resource, .. }
            | LoadError::Io { resource, .. }
            | LoadError::Missing { resource }
            | LoadError::Parse { resource, .. } => Some(*resource),
            LoadError::InvalidBase(_) | LoadError::NoOrigin => None,
        }
    }
}

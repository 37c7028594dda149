//! Remote draft service contract.
//!
//! Wraps the backend's draft/campaign endpoints behind a uniform trait so
//! the [`crate::store::DraftStore`] can be exercised against the real HTTP
//! backend or an in-memory double. Every operation either returns a draft or
//! campaign document, or fails with a classified [`ServiceError`].

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    error::{DraftError, ServiceErrorKind},
    models::{Campaign, Draft},
};

mod http;

pub use http::{HttpDraftService, HttpDraftServiceBuilder};

/// A classified failure from the remote draft service.
#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether this failure indicates the backend is unreachable or broken,
    /// as opposed to rejecting this particular request.
    pub fn is_availability(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::Network | ServiceErrorKind::ServerError
        )
    }
}

impl From<ServiceError> for DraftError {
    fn from(e: ServiceError) -> Self {
        DraftError::Service {
            kind: e.kind,
            message: e.message,
        }
    }
}

/// Result type alias for service client operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Uniform contract over the backend's draft and campaign endpoints.
///
/// Implementations hold no mutable state beyond transport configuration.
#[async_trait]
pub trait DraftService: Send + Sync {
    /// Creates a new draft remotely; the response carries the assigned id.
    async fn create(&self, draft: &Draft) -> ServiceResult<Draft>;

    /// Updates an existing draft by id.
    async fn update(&self, id: &str, draft: &Draft) -> ServiceResult<Draft>;

    /// Fetches a draft by id.
    async fn fetch(&self, id: &str) -> ServiceResult<Draft>;

    /// Lists the caller's drafts.
    async fn list(&self) -> ServiceResult<Vec<Draft>>;

    /// Publishes a draft, producing a campaign.
    async fn publish(&self, id: &str) -> ServiceResult<Campaign>;

    /// Creates a campaign directly, bypassing draft semantics.
    ///
    /// Used only as a last-resort publish fallback.
    async fn create_campaign(&self, draft: &Draft) -> ServiceResult<Campaign>;
}
